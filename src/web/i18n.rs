use std::str::FromStr;

use poem::i18n::unic_langid::LanguageIdentifier;
use poem::i18n::{I18NBundle, I18NResources};

use crate::prelude::*;

/// Languages with a translation, the first one is the default.
pub const LANGUAGES: [&str; 2] = ["pt", "en"];

pub fn build_resources() -> Result<I18NResources> {
    I18NResources::builder()
        .add_ftl("pt", include_str!("i18n/pt.ftl"))
        .add_ftl("en", include_str!("i18n/en.ftl"))
        .default_language(LanguageIdentifier::from_str(LANGUAGES[0])?)
        .build()
        .context("failed to build the i18n resources")
}

pub fn bundle(resources: &I18NResources, language: &str) -> Result<I18NBundle> {
    let language = LanguageIdentifier::from_str(language)?;
    Ok(resources.negotiate_languages(&[language]))
}
