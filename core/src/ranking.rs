use crate::model::VideoSummary;
use std::cmp::Ordering;

pub fn compare_by_views(a: &VideoSummary, b: &VideoSummary) -> Ordering {
    b.view_count.cmp(&a.view_count)
}

/// Most viewed first. `sort_by` is stable, so ties keep their search order.
pub fn rank_by_views(videos: &mut [VideoSummary]) {
    videos.sort_by(compare_by_views);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video(id: &str, view_count: u64) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: id.to_uppercase(),
            view_count,
            duration: "00:10".to_string(),
            thumbnail: String::new(),
        }
    }

    fn ids(videos: &[VideoSummary]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn sorts_descending_by_views() {
        let mut videos = vec![video("a", 100), video("b", 50000), video("c", 7)];
        rank_by_views(&mut videos);
        assert_eq!(ids(&videos), vec!["b", "a", "c"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut videos = vec![
            video("first", 10),
            video("top", 99),
            video("second", 10),
            video("third", 10),
        ];
        rank_by_views(&mut videos);
        assert_eq!(ids(&videos), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn compares_numerically_not_lexically() {
        let mut videos = vec![video("nine", 9), video("ten", 10), video("hundred", 100)];
        rank_by_views(&mut videos);
        assert_eq!(ids(&videos), vec!["hundred", "ten", "nine"]);
    }

    #[test]
    fn empty_list_is_fine() {
        let mut videos: Vec<VideoSummary> = Vec::new();
        rank_by_views(&mut videos);
        assert!(videos.is_empty());
    }
}
