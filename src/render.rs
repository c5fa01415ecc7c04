//! HTML fragment construction for the results area. Pure string-in,
//! string-out: everything user- or upstream-originated passes through
//! [`escape_html`] before it touches markup.

use crate::model::{GraphsenseTag, VerificationResult};

/// Replace `& < > " '` with their entity forms. Applied to every external
/// string, including values reused inside class attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Styled inline paragraph used for validation and failure messages.
pub fn inline_message(msg: &str) -> String {
    format!(r#"<p style="color: #ff7979;">{}</p>"#, escape_html(msg))
}

/// Render one verification result as the result card fragment.
pub fn results_fragment(result: &VerificationResult) -> String {
    let mut content = format!(
        "<h3>Verification Results for: {}</h3>",
        escape_html(&result.address)
    );

    content.push_str(&format!(
        r#"<p><span class="label">Sanctioned by Local Blacklist:</span> <span class="value-{v}">{v}</span></p>"#,
        v = result.sanctioned_by_local_blacklist
    ));
    content.push_str(&format!(
        r#"<p><span class="label">On Polkadot Scam List:</span> <span class="value-{v}">{v}</span></p>"#,
        v = result.on_polkadot_scam_list
    ));

    content.push_str(&format!(
        r#"<p><span class="label">Risk Level:</span> <span class="risk-{}">{}</span></p>"#,
        escape_html(&result.risk_level.to_lowercase()),
        escape_html(&result.risk_level)
    ));
    content.push_str(&format!(
        r#"<p><span class="label">Risk Score:</span> {}/100</p>"#,
        result.risk_score
    ));

    content.push_str(&tags_section(&result.graphsense_tags));

    format!(r#"<div class="result-item">{}</div>"#, content)
}

// Three-way tag policy: no tags at all, a single informational string from
// the tagging API, or a real tag list.
fn tags_section(tags: &[GraphsenseTag]) -> String {
    match tags.first() {
        None => r#"<p><span class="label">GraphSense Tags:</span> No tags found or API not responsive.</p>"#
            .to_string(),
        Some(GraphsenseTag::Text(first)) if first.starts_with("GraphSense API") => format!(
            r#"<p><span class="label">GraphSense Info:</span> {}</p>"#,
            escape_html(first)
        ),
        Some(_) => {
            let mut out = String::from(r#"<p><span class="label">GraphSense Tags:</span></p><ul>"#);
            for tag in tags {
                out.push_str(&format!("<li>{}</li>", tag_item(tag)));
            }
            out.push_str("</ul>");
            out
        }
    }
}

fn tag_item(tag: &GraphsenseTag) -> String {
    if let GraphsenseTag::Entry(entry) = tag {
        if !entry.label.is_empty() {
            return format!(
                "{} (Source: {}, Category: {})",
                escape_html(&entry.label),
                escape_html(entry.source.as_deref().unwrap_or("N/A")),
                escape_html(entry.category.as_deref().unwrap_or("N/A"))
            );
        }
    }
    // Unrecognized shape (or an entry with an empty label): echo the raw
    // JSON text, escaped.
    escape_html(&serde_json::to_string(tag).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_result() -> VerificationResult {
        VerificationResult {
            address: "abc".to_string(),
            sanctioned_by_local_blacklist: false,
            on_polkadot_scam_list: true,
            risk_level: "High".to_string(),
            risk_score: 87.0,
            graphsense_tags: Vec::new(),
        }
    }

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x" title='&'>"#),
            "&lt;a href=&quot;x&quot; title=&#39;&amp;&#39;&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("1FfmbHfnpaZjKFvyi1okTjJJusN455paPH"), "1FfmbHfnpaZjKFvyi1okTjJJusN455paPH");
    }

    #[test]
    fn renders_flags_risk_and_empty_tags_notice() {
        let html = results_fragment(&base_result());
        assert!(html.contains("Verification Results for: abc"));
        assert!(html.contains(r#"<span class="label">Sanctioned by Local Blacklist:</span> <span class="value-false">false</span>"#));
        assert!(html.contains(r#"<span class="label">On Polkadot Scam List:</span> <span class="value-true">true</span>"#));
        assert!(html.contains(r#"<span class="risk-high">High</span>"#));
        assert!(html.contains("Risk Score:</span> 87/100"));
        assert!(html.contains("No tags found or API not responsive."));
    }

    #[test]
    fn renders_structured_tag_entries() {
        let mut result = base_result();
        result.graphsense_tags =
            serde_json::from_str(r#"[{"label":"Mixer","source":"CR","category":"Scam"}]"#).unwrap();
        let html = results_fragment(&result);
        assert!(html.contains("<li>Mixer (Source: CR, Category: Scam)</li>"));
    }

    #[test]
    fn missing_source_and_category_fall_back_to_na() {
        let mut result = base_result();
        result.graphsense_tags = serde_json::from_str(r#"[{"label":"Exchange"}]"#).unwrap();
        let html = results_fragment(&result);
        assert!(html.contains("<li>Exchange (Source: N/A, Category: N/A)</li>"));
    }

    #[test]
    fn graphsense_info_string_renders_single_line() {
        let mut result = base_result();
        result.graphsense_tags = serde_json::from_str(
            r#"["GraphSense API not configured", {"label":"ignored"}]"#,
        )
        .unwrap();
        let html = results_fragment(&result);
        assert!(html.contains("GraphSense Info:</span> GraphSense API not configured"));
        assert!(!html.contains("ignored"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn plain_string_tag_without_prefix_lists_verbatim() {
        let mut result = base_result();
        result.graphsense_tags = serde_json::from_str(r#"["darknet market"]"#).unwrap();
        let html = results_fragment(&result);
        assert!(html.contains(r#"<li>&quot;darknet market&quot;</li>"#));
    }

    #[test]
    fn unrecognized_tag_shape_echoes_raw_json() {
        let mut result = base_result();
        result.graphsense_tags = serde_json::from_str(r#"[{"abuse":"ransomware"}]"#).unwrap();
        let html = results_fragment(&result);
        assert!(html.contains("<li>{&quot;abuse&quot;:&quot;ransomware&quot;}</li>"));
    }

    #[test]
    fn script_in_label_renders_as_text() {
        let mut result = base_result();
        result.address = "<script>alert(1)</script>".to_string();
        result.graphsense_tags =
            serde_json::from_str(r#"[{"label":"<script>alert(2)</script>"}]"#).unwrap();
        let html = results_fragment(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;script&gt;alert(2)&lt;/script&gt;"));
    }

    #[test]
    fn risk_level_class_hook_is_escaped_and_lowercased() {
        let mut result = base_result();
        result.risk_level = "HIGH\">".to_string();
        let html = results_fragment(&result);
        assert!(html.contains(r#"risk-high&quot;&gt;"#));
        assert!(!html.contains(r#"risk-high">"#));
    }

    #[test]
    fn inline_message_is_styled_and_escaped() {
        let html = inline_message("Error: <oops>");
        assert_eq!(
            html,
            r#"<p style="color: #ff7979;">Error: &lt;oops&gt;</p>"#
        );
    }
}
