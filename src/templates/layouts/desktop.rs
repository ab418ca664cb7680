use maud::{html, Markup, DOCTYPE};

const MENU_ITEMS: &[(&str, &str)] = &[("Home", "/")];

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body {
                header class="site-header" {
                    span class="brand" { "Housing" }
                    nav class="nav-desktop" {
                        ul {
                            @for (name, href) in MENU_ITEMS {
                                li { a href=(href) { (name) } }
                            }
                        }
                    }

                    // Small screens get a disclosure menu instead.
                    details class="nav-mobile" {
                        summary aria-label="Open menu" { "☰" }
                        nav {
                            @for (name, href) in MENU_ITEMS {
                                a href=(href) { (name) " ›" }
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
