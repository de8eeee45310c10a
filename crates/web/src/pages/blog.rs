// =============================================================================
// Campana Web - Blog Pages
// =============================================================================
// Table of Contents:
// 1. Blog Index
// 2. Blog Post
// =============================================================================

use leptos::prelude::*;

use crate::components::{CtaBlock, JsonLd, Section};
use crate::content::blog::{self, FALLBACK_CATEGORY, FALLBACK_READ_MINUTES, SAMPLE_POSTS};
use crate::i18n::Translator;
use crate::routing::Page;
use crate::seo;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Blog Index
// -----------------------------------------------------------------------------

/// Article list with categories and the newsletter box.
#[component]
pub fn BlogPage(t: Translator) -> impl IntoView {
    let locale = t.locale();
    let min_read = t.t("common.minRead");
    let read_more = t.t("blog.readMore");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("blog.h1")}</h1>
                <ul class="chip-row">
                    {t.list("blog.categories")
                        .into_iter()
                        .map(|category| view! { <li class="chip">{category}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>

        <Section>
            <div class="post-grid">
                {SAMPLE_POSTS
                    .iter()
                    .map(|post| {
                        let href = t.href(Page::BlogPost(post.slug.to_string()));
                        view! {
                            <article class="card post-card">
                                <p class="post-meta">
                                    <span class="post-category">{post.category}</span>
                                    " · "
                                    {format!("{} {}", post.read_minutes, min_read)}
                                </p>
                                <h2 class="post-title">
                                    <a href=href.clone()>{post.title(locale)}</a>
                                </h2>
                                <a href=href class="text-link">{read_more.clone()}" →"</a>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>

        <Section muted=true class="newsletter">
            <h2 class="section-title">{t.t("blog.newsletterH2")}</h2>
            <p class="section-lead">{t.t("blog.comingSoon")}</p>
            <form class="newsletter-form" on:submit=|e| e.prevent_default()>
                <input type="email" class="form-input" placeholder=t.t("blog.emailPlaceholder") />
                <button type="submit" class="btn btn-primary" disabled=true>{t.t("blog.subscribe")}</button>
            </form>
        </Section>
    }
}

// -----------------------------------------------------------------------------
// 2. Blog Post
// -----------------------------------------------------------------------------

/// A single article; unknown slugs get a headline built from the slug.
#[component]
pub fn BlogPostPage(t: Translator, slug: String) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let locale = t.locale();

    let post = blog::find_post(&slug);
    let headline = blog::headline(&slug, locale);
    let category = post.map_or(FALLBACK_CATEGORY, |p| p.category);
    let minutes = post.map_or(FALLBACK_READ_MINUTES, |p| p.read_minutes);
    let published = blog::published_on();
    let structured = seo::article_json_ld(&app_state.config, &headline, published);

    view! {
        <article class="post">
            <section class="page-hero">
                <div class="container narrow">
                    <a href=t.href(Page::Blog) class="text-link">"← "{t.t("common.backToBlog")}</a>
                    <p class="post-meta">
                        <span class="post-category">{category}</span>
                        " · "
                        {format!("{} {}", minutes, t.t("common.minRead"))}
                    </p>
                    <h1 class="page-title">{headline}</h1>
                    <p class="post-date">
                        {t.t("common.published")}": "
                        <time datetime=published.format("%Y-%m-%d").to_string()>
                            {blog::format_date(published, locale)}
                        </time>
                    </p>
                </div>
            </section>

            <Section>
                <div class="narrow post-body">
                    <p>{t.t("blogPost.template")}</p>
                    <p class="section-note">{t.t("blogPost.comingSoon")}</p>
                </div>
            </Section>
        </article>

        <CtaBlock t=t />
        <JsonLd value=structured />
    }
}
