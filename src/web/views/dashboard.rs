use maud::{html, Markup, DOCTYPE};
use poem::i18n::Locale;
use poem::web::{Data, Html, Query};
use poem::{handler, IntoResponse, Response};

use self::models::{QueryParams, ShellState};
use crate::prediction::AnnualFee;
use crate::prelude::*;
use crate::session::Session;
use crate::web::partials::{footer, headers, Currency, Float};

pub mod models;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get(
    Query(params): Query<QueryParams>,
    session: Data<&Arc<Session>>,
    locale: Locale,
) -> Result<Response> {
    let state = ShellState::new(&session, &params);
    debug!(?state);

    let markup = html! {
        (DOCTYPE)
        html lang=(locale.text("html-lang")?) {
            head {
                (headers())
                title { (locale.text("page-title")?) }
            }
            body {
                section.section {
                    div.container {
                        h1.title { (locale.text("title")?) }
                        p.subtitle { (locale.text("subtitle")?) }
                        (explanation(&locale)?)
                    }
                }

                section.section."pt-0" {
                    div.container {
                        div.columns."is-variable"."is-6" {
                            div.column."is-half" {
                                div.box {
                                    h3.title."is-5".has-text-centered { (locale.text("table-title")?) }
                                    (observation_table(&session))
                                }
                            }
                            div.column."is-half" {
                                div.box {
                                    h3.title."is-5".has-text-centered { (locale.text("chart-title")?) }
                                    figure.image {
                                        img
                                            src=(format!("/charts/{}", locale.text("chart-language")?))
                                            alt=(locale.text("chart-alt")?);
                                    }
                                    (model_summary(&session, &locale)?)
                                }
                            }
                        }
                    }
                }

                section.section."pt-0" {
                    div.container {
                        div.columns.is-centered {
                            div.column."is-half" {
                                h2.title."is-4" { (locale.text("input-title")?) }
                                (prediction_form(state.annual_fee(), &locale)?)
                                @if let ShellState::PredictionShown(prediction) = &state {
                                    div.notification.is-success."mt-4" {
                                        (locale.text("prediction-result")?)
                                        " " strong { (Currency(prediction.initial_cost)) }
                                    }
                                }
                            }
                        }
                    }
                }

                (footer(&locale)?)
            }
        }
    };
    Ok(Html(markup.into_string()).into_response())
}

fn explanation(locale: &Locale) -> Result<Markup> {
    let markup = html! {
        details.box {
            summary.has-text-weight-semibold { (locale.text("explanation-summary")?) }
            div.content."mt-3" {
                p { (locale.text("explanation-intro")?) }
                p { strong { (locale.text("explanation-how")?) } }
                ol {
                    li { (locale.text("explanation-step-input")?) }
                    li { (locale.text("explanation-step-predict")?) }
                    li { (locale.text("explanation-step-chart")?) }
                }
            }
        }
    };
    Ok(markup)
}

fn observation_table(session: &Session) -> Markup {
    html! {
        div.table-container.observations {
            table.table.is-hoverable.is-striped.is-narrow.is-fullwidth {
                thead {
                    tr {
                        th { "#" }
                        th.has-text-right { (session.dataset.fee_column()) }
                        th.has-text-right { (session.dataset.cost_column()) }
                    }
                }
                tbody {
                    @for (index, observation) in session.dataset.observations().iter().enumerate() {
                        tr {
                            td.has-text-grey { (index) }
                            td.has-text-right { (Float::from(observation.annual_fee).precision(2)) }
                            td.has-text-right { (Float::from(observation.initial_cost).precision(2)) }
                        }
                    }
                }
            }
        }
    }
}

fn model_summary(session: &Session, locale: &Locale) -> Result<Markup> {
    let markup = html! {
        p.has-text-centered."is-size-7".has-text-grey."mt-3" {
            (locale.text("model-cost")?)
            " = " (Float::from(session.model.slope).precision(4))
            " × " (locale.text("model-fee")?)
            " + " (Float::from(session.model.intercept).precision(2))
            " · R² = " (Float::from(session.r_squared).precision(3))
            " · " (locale.text("model-observations")?) ": " (session.dataset.len())
        }
    };
    Ok(markup)
}

fn prediction_form(annual_fee: AnnualFee, locale: &Locale) -> Result<Markup> {
    let markup = html! {
        form action="/" method="GET" {
            div.field {
                label.label for="annual-fee" { (locale.text("input-label")?) }
                div.control {
                    input.input
                        type="number"
                        id="annual-fee"
                        name="annual-fee"
                        min=(AnnualFee::MIN)
                        max=(AnnualFee::MAX)
                        step=(AnnualFee::STEP)
                        value=(format!("{:.2}", annual_fee.get()))
                        required;
                }
            }
            div.field {
                div.control {
                    button.button.is-link type="submit" { (locale.text("button-predict")?) }
                }
            }
        }
    };
    Ok(markup)
}
