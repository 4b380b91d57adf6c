use clap::crate_version;
use maud::{html, Markup};
use poem::i18n::Locale;

pub use self::currency::Currency;
pub use self::float::Float;
use crate::prelude::*;

mod currency;
mod float;

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="/static/theme.css?v1";
    }
}

pub fn footer(locale: &Locale) -> Result<Markup> {
    let markup = html! {
        footer.footer {
            div.container {
                p.has-text-weight-bold."mb-2" { (locale.text("footer-project")?) }
                p."is-size-7"."mb-1" { (locale.text("footer-developed-by")?) }
                p."is-size-5".has-text-success.has-text-weight-bold { (locale.text("footer-author")?) }
                p.has-text-grey { (locale.text("footer-author-role")?) }
                p."is-size-7"."mt-3" {
                    (locale.text("footer-tools")?)
                    " " a href="https://www.rust-lang.org/" { "Rust" }
                    ", " a href="https://github.com/poem-web/poem" { "Poem" }
                    ", " a href="https://maud.lambda.xyz/" { "Maud" }
                    ", " a href="https://github.com/plotters-rs/plotters" { "Plotters" }
                    ", " a href="https://bulma.io/" { "Bulma" }
                }
                p."is-size-7".has-text-grey-light { "Franchise Dashboard " (crate_version!()) }
            }
        }
    };
    Ok(markup)
}
