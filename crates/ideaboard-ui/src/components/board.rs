use yew::prelude::*;

use super::FaIcon;

/// Top-level board layout.
#[function_component(Board)]
pub(crate) fn board() -> Html {
    html! {
        <main class="min-h-screen bg-base-200 p-6">
            <header class="flex items-center gap-3 mb-6">
                <FaIcon icon="far:lightbulb" size="2x" title="IdeaBoard" />
                <h1 class="text-2xl font-semibold">{"IdeaBoard"}</h1>
                <button type="button" class="btn btn-primary ml-auto" aria-label="Add idea">
                    <FaIcon icon="plus" fixed_width={true} />
                </button>
            </header>
            <section class="grid gap-4">
                <article class="card bg-base-100 p-4 flex items-center gap-3">
                    <FaIcon icon="grip-lines" class="cursor-move opacity-60" />
                    <p class="flex-1">{"Capture your first idea"}</p>
                    <FaIcon icon="heart" class="text-error" />
                    <FaIcon icon="far:trash-alt" />
                </article>
            </section>
        </main>
    }
}
