use crate::domain::{FilterPhase, Listing, ListingState, PropertyRecord};
use crate::templates::{desktop_layout, filter_bar, property_card};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub state: &'a ListingState,
    pub properties: &'a [PropertyRecord],
    pub currency_symbol: &'a str,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Search Properties for rent",
        html! {
            main class="container" id="listing-page" {
                h1 { "Search Properties for rent" }

                (filter_bar(vm.state))

                @if vm.state.is_filter_active() {
                    (filter_status(vm))
                }

                (listing_grid(vm))
            }
        },
    )
}

fn filter_status(vm: &ListingsVm) -> Markup {
    html! {
        @match (vm.state.phase(), vm.state.filtered()) {
            (FilterPhase::Filtered, Some(matches)) => {
                p class="filter-status" {
                    "Showing " strong { (matches.len()) } " of " (vm.properties.len()) " properties."
                }
            }
            (FilterPhase::Editing, _) => {
                p class="filter-status" { "Press Apply to filter the list." }
            }
            _ => {}
        }
    }
}

fn listing_grid(vm: &ListingsVm) -> Markup {
    html! {
        div class="property-grid" {
            @match vm.state.listing(vm.properties) {
                Listing::NoMatches => {
                    p class="no-results" { "No properties found" }
                }
                Listing::All(properties) | Listing::Matches(properties) => {
                    @for property in properties {
                        (property_card(property, vm.currency_symbol))
                    }
                }
            }
        }
    }
}
