use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::remote_data::RemoteView;
use crate::usecases::u300_ad_copy::api;
use crate::usecases::u300_ad_copy::ui::{AdCopyResults, MarketingTools};
use contracts::usecases::u300_ad_copy::{AdCopy, AdCopyRequest};
use leptos::prelude::*;

/// Marketing intelligence: ad copy generation plus script/email/description tools
#[component]
pub fn MarketingPage() -> impl IntoView {
    let (product_title, set_product_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let ad_copy = RemoteView::<AdCopy>::new();

    let generate = move || {
        let request = AdCopyRequest::new(product_title.get_untracked(), description.get_untracked());
        ad_copy.run("generate ad copy", api::generate_ad_copy(request));
    };

    view! {
        <div id="u300_ad_copy--page" class="page marketing">
            <PageHeader
                title="Marketing Intelligence"
                subtitle="AI-powered marketing content generation"
            />

            // Input
            <div class="panel">
                <h2 class="panel__title">"Generate Ad Copy"</h2>
                <div class="form">
                    <Input
                        label="Product Title"
                        value=product_title
                        on_input=Callback::new(move |v| set_product_title.set(v))
                        placeholder="Wireless Earbuds Pro"
                    />
                    <Textarea
                        label="Product Description"
                        value=description
                        on_input=Callback::new(move |v| set_description.set(v))
                        placeholder="Premium wireless earbuds with noise cancellation..."
                        rows=4
                    />
                    <Button
                        class="button--with-icon"
                        disabled=Signal::derive(move || ad_copy.loading())
                        on_click=Callback::new(move |_| generate())
                    >
                        {icon("sparkles")}
                        {move || if ad_copy.loading() { "Generating..." } else { "Generate AI Ad Copy" }}
                    </Button>
                </div>
            </div>

            // Results
            {move || ad_copy.result().map(|copy| view! { <AdCopyResults ad_copy=copy /> })}

            <MarketingTools product_title=product_title description=description />
        </div>
    }
}
