//! Browser host: mounts the Yew root and reads flags from local storage.

use std::rc::Rc;

use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use web_sys::Element;
use yew::AppHandle;
use yew::prelude::*;

use crate::bootstrap::{HostDocument, MountTarget, bootstrap};
use crate::components::Board;
use crate::config::{BootstrapConfig, BootstrapFlags, FLAGS_STORAGE_KEY};
use crate::vocabulary::{ComponentVocabulary, IconRenderer};

/// Attribute marking an element that already hosts the application.
const MOUNTED_ATTRIBUTE: &str = "data-ideaboard-mounted";

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub(crate) vocabulary: Rc<ComponentVocabulary>,
}

/// Root component: provides the icon renderer to the whole tree.
#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let Some(renderer) = props.vocabulary.icon_renderer().cloned() else {
        console::error!("icon renderer missing from component vocabulary");
        return html! { <Board /> };
    };
    html! {
        <ContextProvider<IconRenderer> context={renderer}>
            <Board />
        </ContextProvider<IconRenderer>>
    }
}

struct BrowserDocument;

impl HostDocument for BrowserDocument {
    type Element = Element;
    type Handle = AppHandle<App>;

    fn resolve(&self, target: &MountTarget) -> Option<Element> {
        gloo::utils::document()
            .query_selector(target.selector())
            .ok()
            .flatten()
    }

    fn is_mounted(&self, element: &Element) -> bool {
        element.has_attribute(MOUNTED_ATTRIBUTE)
    }

    fn attach(
        &mut self,
        element: Element,
        vocabulary: Rc<ComponentVocabulary>,
    ) -> AppHandle<App> {
        if let Err(err) = element.set_attribute(MOUNTED_ATTRIBUTE, "true") {
            console::error!("mount marker could not be set", err);
        }
        yew::Renderer::<App>::with_root_and_props(element, AppProps { vocabulary }).render()
    }

    fn emit_banner(&mut self, message: &str) {
        console::info!(message);
    }
}

fn load_flags() -> BootstrapFlags {
    match LocalStorage::get::<BootstrapFlags>(FLAGS_STORAGE_KEY) {
        Ok(flags) => flags,
        Err(StorageError::KeyNotFound(_)) => BootstrapFlags::default(),
        Err(err) => {
            console::warn!("ignoring stored bootstrap flags", err.to_string());
            BootstrapFlags::default()
        }
    }
}

/// Bootstrap the application into `#app`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = BootstrapConfig {
        flags: load_flags(),
        ..BootstrapConfig::default()
    };
    if let Err(err) = bootstrap(config, &mut BrowserDocument) {
        console::error!("IdeaBoard failed to start", err.to_string());
    }
}
