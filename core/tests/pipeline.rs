use pretty_assertions::assert_eq;
use video_manual_core::export::render_document;
use video_manual_core::session::{SearchPhase, SearchSession};
use video_manual_core::youtube::{
    collect_results, video_ids, SearchListResponse, VideoListResponse, YoutubeApi,
};

fn fixtures() -> (SearchListResponse, VideoListResponse) {
    let search = serde_json::from_str(include_str!("fixtures/search_test.json")).unwrap();
    let videos = serde_json::from_str(include_str!("fixtures/videos_test.json")).unwrap();
    (search, videos)
}

#[test]
fn statistics_request_asks_for_search_ids_in_order() {
    let (search, _) = fixtures();
    let api = YoutubeApi::new("key").unwrap();

    assert_eq!(
        api.videos_url(&video_ids(&search)),
        "https://www.googleapis.com/youtube/v3/videos?part=statistics,contentDetails\
         &id=smallVid001,bigVideo002&key=key"
    );
}

#[test]
fn keyword_test_ranks_most_viewed_first() {
    let (search, videos) = fixtures();
    let results = collect_results(search, videos);

    assert_eq!(results.len(), 2);

    assert_eq!(results[0].id, "bigVideo002");
    assert_eq!(results[0].title, "Testing in production");
    assert_eq!(results[0].view_count, 50000);
    assert_eq!(results[0].formatted_view_count(), "50,000");
    assert_eq!(results[0].duration, "1:02:03");
    assert_eq!(
        results[0].thumbnail,
        "https://i.ytimg.com/vi/bigVideo002/mqdefault.jpg"
    );

    assert_eq!(results[1].id, "smallVid001");
    assert_eq!(results[1].title, "Test & Debug");
    assert_eq!(results[1].duration, "05:09");
}

#[test]
fn export_matches_session_results_row_for_row() {
    let (search, videos) = fixtures();
    let mut session = SearchSession::new();
    let generation = session.begin();
    session.finish(generation, Ok(collect_results(search, videos)));
    assert_eq!(session.phase(), SearchPhase::Results);

    let html = render_document(session.videos());

    let linked: Vec<&str> = html
        .match_indices("watch?v=")
        .map(|(at, _)| &html[at + 8..at + 19])
        .collect();
    let shown: Vec<&str> = session.videos().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(linked, shown);

    let first_row = html.find("<tbody>").map(|at| &html[at..]).unwrap();
    assert!(first_row
        .trim_start_matches("<tbody>")
        .trim_start()
        .starts_with("<tr>\n        <td><a href=\"https://www.youtube.com/watch?v=bigVideo002\""));
    assert!(html.contains("Test &amp; Debug"));
}

#[test]
fn empty_search_leaves_nothing_to_export() {
    let mut session = SearchSession::new();
    let generation = session.begin();
    let results = collect_results(SearchListResponse::default(), VideoListResponse::default());
    session.finish(generation, Ok(results));

    assert_eq!(session.phase(), SearchPhase::Idle);
    assert!(!session.can_export());
}
