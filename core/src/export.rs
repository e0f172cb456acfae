//! Standalone HTML export of a ranked result list.

use crate::model::VideoSummary;
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const EXPORT_FILE_NAME: &str = "動画マニュアル.html";
pub const EXPORT_MIME_TYPE: &str = "text/html;charset=utf-8";
pub const DOCUMENT_TITLE: &str = "動画マニュアル";

pub const COLUMN_TITLE: &str = "タイトル";
pub const COLUMN_VIEWS: &str = "視聴回数";
pub const COLUMN_DURATION: &str = "再生時間";

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; padding: 20px; }
    table { width: 100%; border-collapse: collapse; }
    th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
    th { background-color: #f2f2f2; }
    tr:nth-child(even) { background-color: #f9f9f9; }
    a { color: #1a73e8; text-decoration: none; }
    a:hover { text-decoration: underline; }
"#;

fn render_row(out: &mut String, video: &VideoSummary) {
    out.push_str(&format!(
        r#"
      <tr>
        <td><a href="{href}" target="_blank" rel="noopener noreferrer">{title}</a></td>
        <td>{views}</td>
        <td>{duration}</td>
      </tr>"#,
        href = encode_double_quoted_attribute(&video.watch_url()),
        title = encode_text(&video.title),
        views = video.formatted_view_count(),
        duration = encode_text(&video.duration),
    ));
}

/// Renders the document offered for download. Same input, same bytes.
pub fn render_document(videos: &[VideoSummary]) -> String {
    let mut rows = String::new();
    for video in videos {
        render_row(&mut rows, video);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{DOCUMENT_TITLE}</title>
  <style>{STYLE}  </style>
</head>
<body>
  <h1>{DOCUMENT_TITLE}</h1>
  <table>
    <thead>
      <tr>
        <th>{COLUMN_TITLE}</th>
        <th>{COLUMN_VIEWS}</th>
        <th>{COLUMN_DURATION}</th>
      </tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video(id: &str, title: &str, view_count: u64, duration: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: title.to_string(),
            view_count,
            duration: duration.to_string(),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg"),
        }
    }

    #[test]
    fn renders_one_row_per_video_in_order() {
        let html = render_document(&[
            video("b", "Second", 50000, "1:02:03"),
            video("a", "First", 100, "00:45"),
        ]);

        assert_eq!(html.matches("<tr>").count(), 3);
        let second = html.find("watch?v=b").unwrap();
        let first = html.find("watch?v=a").unwrap();
        assert!(second < first);
        assert!(html.contains("<td>50,000</td>"));
        assert!(html.contains("<td>1:02:03</td>"));
    }

    #[test]
    fn row_links_to_watch_url() {
        let html = render_document(&[video("dQw4w9WgXcQ", "Song", 1, "03:33")]);
        assert!(html.contains(
            r#"<a href="https://www.youtube.com/watch?v=dQw4w9WgXcQ" target="_blank" rel="noopener noreferrer">Song</a>"#
        ));
    }

    #[test]
    fn escapes_markup_in_titles() {
        let html = render_document(&[video("x", "<script>alert('x')</script> & co", 1, "00:01")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert('x')&lt;/script&gt; &amp; co"));
    }

    #[test]
    fn is_a_standalone_document() {
        let html = render_document(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>動画マニュアル</title>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert_eq!(html.matches("<tr>").count(), 1);
    }

    #[test]
    fn output_is_deterministic() {
        let videos = vec![video("a", "A", 3, "00:03"), video("b", "B", 2, "00:02")];
        assert_eq!(render_document(&videos), render_document(&videos.clone()));
    }
}
