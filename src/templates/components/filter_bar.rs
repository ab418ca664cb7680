use crate::domain::criteria::APPLIED_KEY;
use crate::domain::{CriteriaField, FilterAction, FilterCriteria, ListingState};
use maud::{html, Markup};

fn label(field: CriteriaField) -> (&'static str, &'static str) {
    match field {
        CriteriaField::City => ("City", "Enter City"),
        CriteriaField::AvailableFrom => ("Available From", "Enter Move-in Date"),
        CriteriaField::Price => ("Price", "Enter Price Range"),
        CriteriaField::PropertyType => ("Property Type", "Enter Property Type"),
    }
}

/// One labelled text input. Changing it re-requests the page without an
/// action, which keeps the typed value as a draft.
fn input(field: CriteriaField, value: &str) -> Markup {
    let (text, placeholder) = label(field);
    let id = format!("filter-{}", field.key());

    html! {
        div class="filter-field" {
            label for=(id) { (text) }
            input
                type="text"
                id=(id)
                name=(field.key())
                placeholder=(placeholder)
                value=(value)
                hx-get="/"
                hx-trigger="change"
                hx-include="closest form"
                hx-target="#listing-page"
                hx-select="#listing-page"
                hx-swap="outerHTML"
                hx-push-url="true";
        }
    }
}

/// The criteria of the last Apply ride along with every request, so a draft
/// edit does not drop the current result.
fn applied_inputs(applied: &FilterCriteria) -> Markup {
    html! {
        input type="hidden" name=(APPLIED_KEY) value="1";
        @for field in CriteriaField::ALL {
            input type="hidden" name=(field.applied_key()) value=(applied.get(field));
        }
    }
}

pub fn filter_bar(state: &ListingState) -> Markup {
    html! {
        form class="filter-bar" method="get" action="/" {
            @for field in CriteriaField::ALL {
                (input(field, state.criteria().get(field)))
            }

            @if let Some(applied) = state.applied_criteria() {
                (applied_inputs(applied))
            }

            @match state.action() {
                FilterAction::RemoveFilter => {
                    button type="submit" name="action" value="clear" class="btn btn-remove" { "Remove Filter" }
                }
                FilterAction::Apply => {
                    button type="submit" name="action" value="apply" class="btn btn-apply" { "Apply" }
                }
            }
        }
    }
}
