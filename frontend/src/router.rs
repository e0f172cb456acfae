use crate::config::AppConfig;
use crate::download::download_file;
use crate::search::components::{ExportButton, SearchBar, VideoTable};
use video_manual_core::export::{render_document, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use video_manual_core::session::SearchSession;
use video_manual_core::youtube::validate_keyword;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route, config: &AppConfig) -> Html {
    match routes {
        Route::Home => html! { <ManualCreatorApp config={config.clone()} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ManualCreatorProps {
    pub config: AppConfig,
}

#[function_component(ManualCreatorApp)]
pub fn manual_creator_app(props: &ManualCreatorProps) -> Html {
    // Lives outside yew state so async completions always see the latest
    // generation; `refresh` re-renders after each transition.
    let session = use_mut_ref(SearchSession::new);
    let refresh = use_force_update();

    let on_search = {
        let session = session.clone();
        let refresh = refresh.clone();
        let client = props.config.client.clone();

        Callback::from(move |keyword: String| {
            let keyword = match validate_keyword(&keyword) {
                Ok(keyword) => keyword.to_string(),
                Err(e) => {
                    log::warn!("Search not started: {e}");
                    return;
                }
            };

            let generation = session.borrow_mut().begin();
            refresh.force_update();

            let session = session.clone();
            let refresh = refresh.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match client {
                    Ok(client) => client.search(&keyword).await,
                    Err(e) => Err(e),
                };
                if session.borrow_mut().finish(generation, outcome) {
                    refresh.force_update();
                }
            });
        })
    };

    let on_export = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let document = render_document(session.borrow().videos());
            match download_file(EXPORT_FILE_NAME, EXPORT_MIME_TYPE, &document) {
                Ok(()) => log::info!("Exported {} ({} bytes)", EXPORT_FILE_NAME, document.len()),
                Err(e) => log::error!("Failed to export {}: {:?}", EXPORT_FILE_NAME, e),
            }
        })
    };

    let (loading, can_export, videos) = {
        let session = session.borrow();
        (
            session.is_loading(),
            session.can_export(),
            session.videos().to_vec(),
        )
    };

    html! {
        <div class="min-h-screen bg-gray-100 p-4">
            <div class="container mx-auto px-4 py-8 bg-white rounded-lg shadow-lg">
                <h1 class="text-3xl font-bold mb-6 text-center text-gray-800">
                    { &props.config.app_name }
                </h1>

                <SearchBar loading={loading} on_search={on_search} />

                {
                    if can_export {
                        html! {
                            <>
                                <VideoTable videos={videos} />
                                <ExportButton on_export={on_export} />
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
