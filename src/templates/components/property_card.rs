use crate::domain::PropertyRecord;
use maud::{html, Markup};

pub fn property_card(property: &PropertyRecord, currency_symbol: &str) -> Markup {
    let available = property
        .available_from
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    html! {
        article class="property-card" data-id=(property.id) {
            div class="property-image" {
                img src=(property.image_url) alt="Property Image";
            }
            div class="property-body" {
                p class="property-price" {
                    (currency_symbol) (property.price) "/" span class="per" { "month" }
                }
                p class="property-name" { (property.name) }
                p class="property-location" { (property.location_line()) }
                p class="property-type" { (property.property_type) }

                div class="property-stats" {
                    p { (property.bedrooms) " bedrooms" }
                    p { (property.bathrooms) " bathrooms" }
                    p { (property.square_feet) " sqft" }
                }
                p class="property-available" { "Available From :- " (available) }
            }
        }
    }
}
