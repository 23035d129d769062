use yew::{html, Callback, Component, Context, Html, Properties};

/// Modal panel sliding over the list; used by the edit form and the import wizard.
pub struct Sheet;

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub title: String,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Html,
    pub on_close: Callback<()>,
}

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());
        let class = if props.wide { "top-sheet show wide" } else { "top-sheet show" };

        html! {
            <div class="sheet-backdrop">
                <div class={class}>
                    <div class="sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-btn" title="Close" onclick={on_close}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
