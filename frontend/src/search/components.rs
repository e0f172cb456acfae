use video_manual_core::export::{COLUMN_DURATION, COLUMN_TITLE, COLUMN_VIEWS};
use video_manual_core::VideoSummary;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub videos: Vec<VideoSummary>,
}

#[derive(Properties, PartialEq)]
pub struct VideoRowProps {
    pub video: VideoSummary,
}

#[derive(Properties, PartialEq)]
pub struct ExportButtonProps {
    pub on_export: Callback<MouseEvent>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex gap-4 mb-6">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="キーワードを入力"
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "検索中..." } else { "検索" } }
            </button>
        </form>
    }
}

#[function_component(VideoRow)]
pub fn video_row(props: &VideoRowProps) -> Html {
    let show_preview = use_state(|| false);
    let video = &props.video;

    let on_mouse_enter = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(true))
    };
    let on_mouse_leave = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(false))
    };

    html! {
        <tr class="border-b border-gray-200 even:bg-gray-50">
            <td class="p-3 relative">
                <a href={video.watch_url()}
                   target="_blank"
                   rel="noopener noreferrer"
                   class="text-blue-600 hover:underline"
                   onmouseenter={on_mouse_enter}
                   onmouseleave={on_mouse_leave}>
                    { &video.title }
                </a>
                {
                    if *show_preview && !video.thumbnail.is_empty() {
                        html! {
                            <div class="absolute left-0 top-full z-10 mt-1 p-1 bg-white rounded shadow-lg">
                                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="max-w-xs" />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </td>
            <td class="p-3 whitespace-nowrap">{ video.formatted_view_count() }</td>
            <td class="p-3 whitespace-nowrap">{ &video.duration }</td>
        </tr>
    }
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    if props.videos.is_empty() {
        return html! {};
    }

    html! {
        <table class="w-full border-collapse">
            <thead>
                <tr class="bg-gray-100 text-left">
                    <th class="p-3">{ COLUMN_TITLE }</th>
                    <th class="p-3">{ COLUMN_VIEWS }</th>
                    <th class="p-3">{ COLUMN_DURATION }</th>
                </tr>
            </thead>
            <tbody>
                { for props.videos.iter().map(|video| html! {
                    <VideoRow key={video.id.clone()} video={video.clone()} />
                })}
            </tbody>
        </table>
    }
}

#[function_component(ExportButton)]
pub fn export_button(props: &ExportButtonProps) -> Html {
    html! {
        <div class="mt-6 text-center">
            <button
                onclick={props.on_export.clone()}
                class="bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700"
            >
                {"HTMLでダウンロード"}
            </button>
        </div>
    }
}
