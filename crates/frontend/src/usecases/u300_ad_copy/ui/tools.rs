use crate::shared::components::ToolCard;
use crate::shared::remote_data::RemoteView;
use crate::usecases::u300_ad_copy::api;
use contracts::usecases::u300_ad_copy::{
    selling_points, EmailSequenceQuery, ProductDescriptionQuery, VideoScriptQuery,
    DEFAULT_TARGET_AUDIENCE, DEFAULT_VIDEO_DURATION,
};
use leptos::prelude::*;
use serde_json::Value;

/// Video script, email sequence and product description generators.
///
/// All three reuse the title and description typed into the ad copy form;
/// the description is split into selling points where the endpoint wants a list.
#[component]
pub fn MarketingTools(
    #[prop(into)] product_title: Signal<String>,
    #[prop(into)] description: Signal<String>,
) -> impl IntoView {
    let video_script = RemoteView::<Value>::new();
    let email_sequence = RemoteView::<Value>::new();
    let product_description = RemoteView::<Value>::new();

    let run_video = Callback::new(move |_| {
        let query = VideoScriptQuery {
            product_title: product_title.get_untracked(),
            duration: DEFAULT_VIDEO_DURATION,
        };
        let benefits = selling_points(&description.get_untracked());
        video_script.run(
            "generate video script",
            api::generate_video_script(query, benefits),
        );
    });
    let run_email = Callback::new(move |_| {
        let query = EmailSequenceQuery {
            product_title: product_title.get_untracked(),
        };
        email_sequence.run("generate email sequence", api::generate_email_sequence(query));
    });
    let run_description = Callback::new(move |_| {
        let query = ProductDescriptionQuery {
            product_title: product_title.get_untracked(),
            target_audience: DEFAULT_TARGET_AUDIENCE.to_string(),
        };
        let features = selling_points(&description.get_untracked());
        product_description.run(
            "generate product description",
            api::generate_product_description(query, features),
        );
    });

    view! {
        <div class="grid grid--3">
            <ToolCard
                title="Video Script"
                hint="TikTok/Instagram Reels"
                action_label="Generate Script"
                remote=video_script
                on_run=run_video
            />
            <ToolCard
                title="Email Sequence"
                hint="Automated email campaign"
                action_label="Create Sequence"
                remote=email_sequence
                on_run=run_email
            />
            <ToolCard
                title="Product Description"
                hint="SEO-optimized content"
                action_label="Generate Description"
                remote=product_description
                on_run=run_description
            />
        </div>
    }
}
