//! Handlers for the server-rendered form.
//!
//! Every request carries the full form state (language and text), so each
//! action is independent and nothing is kept between requests.

use axum::{
    extract::{Form, Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::language::Language;
use crate::state::AppState;
use crate::ui::{self, PageView};

/// Form fields submitted by the page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormInput {
    /// Language slug, name or code; unknown values fall back to the default
    pub language: Option<String>,
    pub text: String,
}

impl FormInput {
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_str_or_default)
            .unwrap_or_default()
    }

    fn into_view(self) -> PageView {
        let language = self.language();
        PageView::new(language, self.text)
    }
}

/// Initial render and language selection change. Makes no external call.
pub async fn index(Query(input): Query<FormInput>) -> Html<String> {
    Html(ui::render_page(&input.into_view()))
}

/// "Play": synthesize the entered text and render a player with a download link
pub async fn play(State(state): State<Arc<AppState>>, Form(input): Form<FormInput>) -> Html<String> {
    let view = input.into_view();
    tracing::info!(
        "Play requested ({}, {} chars)",
        view.language.code(),
        view.text.chars().count()
    );

    let outcome = ui::play(state.synthesizer.as_ref(), view.language, &view.text).await;
    Html(ui::render_page(&view.with_outcome(outcome)))
}

/// "View Generation Info": show the provider's usage metadata
pub async fn generation_info(
    State(state): State<Arc<AppState>>,
    Form(input): Form<FormInput>,
) -> Html<String> {
    let view = input.into_view();
    tracing::info!("Generation info requested");

    let outcome = ui::view_generation_info(&state.diagnostics).await;
    Html(ui::render_page(&view.with_outcome(outcome)))
}
