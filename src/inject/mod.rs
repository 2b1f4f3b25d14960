//! Label-driven text injection for pre-authored hospital form HTML.
//!
//! The templates are PDF-to-HTML conversions of printed forms: field labels
//! followed by blank runs of underscores or dots. There is no DOM model and
//! no templating language here — injection is best-effort regex overlay.
//! For each supplied field we hunt for one of its known label spellings,
//! allow a bounded gap (tags, whitespace), and replace the trailing
//! placeholder run with a styled value span. The document is otherwise left
//! untouched, apart from a print stylesheet appended at the end so the
//! browser's print-to-PDF produces a clean A4 page.

mod fields;

use std::collections::BTreeMap;

/// Inject field values into template HTML and append the print stylesheet.
///
/// Fields whose labels never match leave the document unchanged; that is
/// expected for forms that simply don't carry the field. For each field the
/// first matching label alias wins, and every occurrence of that alias's
/// placeholder is overlaid (multi-page forms repeat their header block).
pub fn inject_data(html: &str, data: &BTreeMap<String, String>) -> String {
    let mut result = html.to_string();

    for (key, value) in data {
        let span = value_span(value);

        if let Some(patterns) = fields::alias_patterns(key) {
            for re in patterns {
                if re.is_match(&result) {
                    result = re
                        .replace_all(&result, |caps: &regex::Captures| {
                            format!("{}{}", &caps[1], span)
                        })
                        .into_owned();
                    break;
                }
            }
        } else if let Some(re) = fields::literal_pattern(key) {
            // Unknown key: treat the key itself as the printed label.
            if re.is_match(&result) {
                result = re
                    .replace_all(&result, |caps: &regex::Captures| {
                        format!("{}{}", &caps[1], span)
                    })
                    .into_owned();
            }
        }
    }

    result.push_str(PRINT_STYLES);
    result
}

/// The overlay span carrying an injected value. Empty values still inject
/// `&nbsp;` so the span renders (and visibly marks the field as addressed).
fn value_span(value: &str) -> String {
    let content = if value.is_empty() {
        "&nbsp;".to_string()
    } else {
        escape_html(value)
    };
    format!(
        "<span style=\"color: blue; text-decoration: underline; font-weight: bold; \
         font-family: sans-serif; font-size: 1.05em;\">{content}</span>"
    )
}

/// Minimal HTML escaping for injected values. Values arrive over HTTP and
/// land inside the document, so markup characters must not pass through.
/// Also used by the server-rendered pages for template names.
pub(crate) fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Print-specific CSS appended to every filled document. Hides everything
/// except the `.pdf24_02` form container (the page wrapper emitted by the
/// PDF conversion) and suppresses browser print margins so the form fills
/// an A4 page without headers/footers.
const PRINT_STYLES: &str = r#"
    <style>
      @media print {
        @page {
          margin: 0;
          size: A4 portrait;
        }
        html, body {
          margin: 0 !important;
          padding: 0 !important;
          background: white !important;
          -webkit-print-color-adjust: exact !important;
          print-color-adjust: exact !important;
        }
        /* Hide everything by default */
        body > * {
          display: none !important;
        }
        /* Only show the actual form container */
        .pdf24_02 {
          display: block !important;
          /* Reduced negative margins to stop over-cropping */
          margin: -0.5cm auto 0 auto !important;
          padding: 0 !important;
          box-shadow: none !important;
          border: none !important;
          /* Scale set to 1.0 to fill page without cutting off edges */
          transform: scale(1.0);
          transform-origin: top center;
          width: 210mm;
          min-height: 297mm;
        }
        /* Ensure images and backgrounds show */
        img {
          display: block !important;
        }
        /* Remove any potential shadows/borders from all source elements */
        * {
          box-shadow: none !important;
          text-shadow: none !important;
          -webkit-print-color-adjust: exact !important;
        }
        .no-print { display: none !important; }
      }
    </style>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_underscore_run_after_label() {
        let html = "<p>UID No: ________</p>";
        let out = inject_data(html, &fields(&[("uid", "12345")]));
        assert!(out.contains("UID No: <span"));
        assert!(out.contains(">12345</span>"));
        assert!(!out.contains("________"));
    }

    #[test]
    fn replaces_dot_run_after_label() {
        let html = "<p>Diagnosis .......</p>";
        let out = inject_data(html, &fields(&[("diagnosis", "Dengue")]));
        assert!(out.contains(">Dengue</span>"));
        assert!(!out.contains("......."));
    }

    #[test]
    fn replaces_ellipsis_and_middle_dot_runs() {
        let html = "<p>Duration \u{2026}\u{2026}</p><p>Bed No \u{B7}\u{B7}\u{B7}</p>";
        let out = inject_data(html, &fields(&[("duration", "2 Days"), ("bed", "ICU-05")]));
        assert!(out.contains(">2 Days</span>"));
        assert!(out.contains(">ICU-05</span>"));
    }

    #[test]
    fn label_match_is_case_insensitive() {
        let html = "<p>uid no ____</p>";
        let out = inject_data(html, &fields(&[("uid", "987")]));
        assert!(out.contains(">987</span>"));
    }

    #[test]
    fn gap_between_label_and_placeholder_crosses_tags() {
        let html = "<td><b>Patient's Name</b></td><td>______</td>";
        let out = inject_data(html, &fields(&[("name", "A. Sharma")]));
        assert!(out.contains(">A. Sharma</span>"));
    }

    #[test]
    fn distant_placeholder_is_not_captured() {
        // More than 150 chars between label and blanks — must not match
        let html = format!("Consultant {} ______", "x".repeat(160));
        let out = inject_data(&html, &fields(&[("consultant", "Dr. Rao")]));
        assert!(out.contains("______"));
        assert!(!out.contains("Dr. Rao"));
    }

    #[test]
    fn first_matching_alias_wins() {
        // "UID No" is tried before "Reg No"; only its placeholder is filled
        let html = "<p>UID No ____</p><p>Reg No ____</p>";
        let out = inject_data(html, &fields(&[("uid", "42")]));
        let filled = out.matches("<span").count();
        assert_eq!(filled, 1);
        assert!(out.contains("UID No <span"));
        assert!(out.contains("Reg No ____"));
    }

    #[test]
    fn fallback_alias_used_when_first_absent() {
        let html = "<p>Reg No ____</p>";
        let out = inject_data(html, &fields(&[("uid", "42")]));
        assert!(out.contains("Reg No <span"));
    }

    #[test]
    fn all_occurrences_of_winning_alias_replaced() {
        let html = "<p>IPD No ____</p><hr><p>IPD No ____</p>";
        let out = inject_data(html, &fields(&[("ipd", "77")]));
        assert_eq!(out.matches(">77</span>").count(), 2);
    }

    #[test]
    fn entity_encoded_admission_label_matches() {
        let html = "<p>Date &amp; Time Of Admission ____</p>";
        let out = inject_data(html, &fields(&[("admissionDate", "01/02/2026  9:30 AM")]));
        assert!(out.contains(">01/02/2026  9:30 AM</span>"));
    }

    #[test]
    fn empty_value_injects_nbsp() {
        let html = "<p>Age/Sex ____</p>";
        let out = inject_data(html, &fields(&[("age", "")]));
        assert!(out.contains(">&nbsp;</span>"));
    }

    #[test]
    fn unknown_key_matches_as_literal_label() {
        let html = "<p>Blood Group ____</p>";
        let out = inject_data(html, &fields(&[("Blood Group", "B+")]));
        assert!(out.contains(">B+</span>"));
    }

    #[test]
    fn unmatched_field_leaves_document_unchanged() {
        let html = "<p>Nothing to fill here</p>";
        let out = inject_data(html, &fields(&[("uid", "1")]));
        assert!(out.starts_with("<p>Nothing to fill here</p>"));
    }

    #[test]
    fn values_are_html_escaped() {
        let html = "<p>Diagnosis ____</p>";
        let out = inject_data(html, &fields(&[("diagnosis", "<script>alert(1)</script>")]));
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn print_styles_always_appended() {
        let out = inject_data("<p>x</p>", &BTreeMap::new());
        assert!(out.contains("@media print"));
        assert!(out.contains(".pdf24_02"));
        assert!(out.contains("size: A4 portrait"));
    }

    #[test]
    fn single_underscore_is_not_a_placeholder() {
        let html = "<p>UID No _</p>";
        let out = inject_data(html, &fields(&[("uid", "1")]));
        assert!(out.contains("UID No _"));
        assert!(!out.contains("<span"));
    }

    #[test]
    fn escape_html_covers_markup_chars() {
        assert_eq!(escape_html(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
