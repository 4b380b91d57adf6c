use std::collections::HashMap;

use poem::i18n::{I18NBundle, I18NResources};

use crate::chart::{self, ChartLabels};
use crate::prelude::*;
use crate::session::Session;
use crate::web::i18n;

/// Pre-rendered SVG charts, one per page language.
pub struct Charts(HashMap<&'static str, String>);

impl Charts {
    #[instrument(skip_all)]
    pub fn render(session: &Session, resources: &I18NResources) -> Result<Self> {
        let mut charts = HashMap::with_capacity(i18n::LANGUAGES.len());
        for language in i18n::LANGUAGES {
            let labels = labels(&i18n::bundle(resources, language)?)?;
            let svg = chart::render_svg(&session.dataset, &session.model, &labels)
                .with_context(|| format!("failed to render the `{}` chart", language))?;
            charts.insert(language, svg);
        }
        Ok(Self(charts))
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }
}

fn labels(bundle: &I18NBundle) -> Result<ChartLabels> {
    Ok(ChartLabels {
        x_axis: bundle.text("chart-x-axis")?,
        y_axis: bundle.text("chart-y-axis")?,
        observations: bundle.text("chart-observations")?,
        regression: bundle.text("chart-regression")?,
    })
}
