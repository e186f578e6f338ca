//! Server-rendered pages

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::activation::ActivationToken;
use crate::api::{ACTIVATE_PATH, HOME_PATH};

const APP_NAME: &str = "Activation Portal";

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (APP_NAME) }
            }
            body {
                div id="root" { (content) }
            }
        }
    }
}

/// Main application entry
pub fn home_page() -> Markup {
    layout(
        "Home",
        html! {
            main data-page="home" {
                h1 { (APP_NAME) }
                p { "Welcome. Follow the link in your activation email to confirm your account." }
            }
        },
    )
}

/// Activation page; `alert` carries the failure message after a failed confirm.
pub fn activation_page(token: &ActivationToken, alert: Option<&str>) -> Markup {
    layout(
        "Activate",
        html! {
            main data-page="activation" {
                h1 { "Registration Confirmed" }
                @if let Some(message) = alert {
                    div role="alert" { (message) }
                    script { (PreEscaped(alert_script(message))) }
                }
                form method="post" action=(ACTIVATE_PATH) {
                    input type="hidden" name="token" value=(token.as_str());
                    button type="submit" { "Click to confirm" }
                }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    layout(
        "Not Found",
        html! {
            main data-page="not-found" {
                h1 { "Page not found" }
                a href=(HOME_PATH) { "Back to home" }
            }
        },
    )
}

// JSON string literals are valid JS string literals.
fn alert_script(message: &str) -> String {
    format!("window.alert({});", serde_json::Value::from(message))
}
