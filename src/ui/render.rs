//! HTML rendering for the form page.

use std::fmt::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::view::{Outcome, PageView};
use crate::core::language::Language;
use crate::core::tts::AudioClip;

pub const PAGE_TITLE: &str = "Multilingual Text to Speech";
const SUBTITLE: &str = "Write your text in Bengali, English, or Hindi and listen/download the audio.";
const LANGUAGE_LABEL: &str = "Choose Language / ভাষা নির্বাচন করুন / भाषा चुनें";
const PROGRESS_LABEL: &str = "Generating audio...";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#262730}\
label{display:block;margin:1rem 0 .4rem;font-size:.9rem}\
select,textarea{width:100%;box-sizing:border-box;padding:.5rem;font-size:1rem}\
textarea{height:150px}\
.actions{display:flex;gap:.75rem;margin:1rem 0}\
button{padding:.5rem 1rem;font-size:1rem;cursor:pointer}\
.alert{padding:.75rem 1rem;border-radius:.4rem;margin:.75rem 0}\
.alert.success{background:#e8f9ee;color:#177233}\
.alert.warning{background:#fffce7;color:#926c05}\
.alert.error{background:#ffecec;color:#7d353b}\
pre{background:#f0f2f6;padding:.75rem;overflow-x:auto;white-space:pre-wrap}\
audio{width:100%;margin:.5rem 0}";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `data:` URI holding the whole clip, so nothing is stored server-side
fn data_uri(clip: &AudioClip) -> String {
    format!(
        "data:{};base64,{}",
        clip.format.mime_type(),
        STANDARD.encode(&clip.data)
    )
}

fn render_language_options(out: &mut String, selected: Language) {
    for language in Language::ALL {
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            language.slug(),
            if language == selected { " selected" } else { "" },
            language.name()
        );
    }
}

fn render_outcome(out: &mut String, outcome: &Outcome) {
    match outcome {
        Outcome::Audio { clip, filename } => {
            let uri = data_uri(clip);
            let _ = write!(
                out,
                r#"<audio controls src="{uri}"></audio><a class="download" href="{uri}" download="{name}" type="{mime}">⬇️ Download</a>"#,
                name = escape_html(filename),
                mime = clip.format.mime_type(),
            );
        }
        Outcome::Warning(msg) => {
            let _ = write!(
                out,
                r#"<div class="alert warning" role="alert">{}</div>"#,
                escape_html(msg)
            );
        }
        Outcome::Error(msg) => {
            let _ = write!(
                out,
                r#"<div class="alert error" role="alert">{}</div>"#,
                escape_html(msg)
            );
        }
        Outcome::GenerationInfo { body } => {
            let _ = write!(
                out,
                r#"<div class="alert success">✅ Generation Info:</div><pre><code>{}</code></pre>"#,
                escape_html(body)
            );
        }
        Outcome::GenerationInfoFailed { status, body } => {
            let _ = write!(
                out,
                r#"<div class="alert error" role="alert">⚠️ Failed to fetch info. Status: {status}</div><pre>{}</pre>"#,
                escape_html(body)
            );
        }
    }
}

/// Render the complete page for one request
pub fn render_page(view: &PageView) -> String {
    let mut out = String::with_capacity(4096);

    let _ = write!(
        out,
        concat!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<title>{title}</title><style>{style}</style></head><body><main>"#,
            r#"<h1>🎙️ {title}</h1><p>{subtitle}</p>"#,
            r#"<form id="tts-form" method="post" action="/play" "#,
            r#"onsubmit="document.getElementById('progress').hidden=false">"#,
            r#"<label for="language">{language_label}</label>"#,
            r#"<select id="language" name="language" "#,
            r#"onchange="this.form.onsubmit=null;this.form.method='get';this.form.action='/';this.form.submit()">"#,
        ),
        title = PAGE_TITLE,
        style = STYLE,
        subtitle = SUBTITLE,
        language_label = LANGUAGE_LABEL,
    );

    render_language_options(&mut out, view.language);

    let _ = write!(
        out,
        concat!(
            r#"</select><label for="text">{label}</label>"#,
            r#"<textarea id="text" name="text" placeholder="{placeholder}">{text}</textarea>"#,
            r#"<div class="actions">"#,
            r#"<button type="submit" formaction="/generation-info">🎤 View Generation Info</button>"#,
            r#"<button type="submit" formaction="/play">🎧 Play</button>"#,
            r#"</div></form><p id="progress" hidden>{progress}</p>"#,
        ),
        label = escape_html(&view.text_label()),
        placeholder = escape_html(view.language.placeholder()),
        text = escape_html(&view.text),
        progress = PROGRESS_LABEL,
    );

    match &view.outcome {
        Some(outcome) => {
            let _ = write!(out, r#"<section id="result" data-outcome="{}">"#, outcome.kind());
            render_outcome(&mut out, outcome);
            out.push_str("</section>");
        }
        None => out.push_str(r#"<section id="result"></section>"#),
    }

    out.push_str("</main></body></html>");
    out
}
