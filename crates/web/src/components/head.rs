// =============================================================================
// Campana Web - Document Head
// =============================================================================
// Title, description, canonical/hreflang links, Open Graph and Twitter tags
// through leptos_meta. Tags are replaced on every navigation.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::seo::PageMeta;
use crate::utils;

/// `<head>` tags for one page.
#[component]
pub fn PageHead(meta: PageMeta) -> impl IntoView {
    utils::set_document_lang(meta.lang);

    let PageMeta {
        title,
        description,
        canonical,
        alternates,
        site_name,
        og_type,
        og_locale,
        twitter_card,
        ..
    } = meta;

    let indexed = !canonical.is_empty();
    let canonical_tags = indexed.then(|| {
        view! {
            <Link rel="canonical" href=canonical.clone() />
            <Meta property="og:url" content=canonical />
        }
    });

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        {(!indexed).then(|| view! { <Meta name="robots" content="noindex" /> })}
        {canonical_tags}
        {alternates
            .into_iter()
            .map(|alt| view! { <Link rel="alternate" hreflang=alt.hreflang href=alt.href /> })
            .collect::<Vec<_>>()}

        // Open Graph
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description.clone() />
        <Meta property="og:site_name" content=site_name />
        <Meta property="og:locale" content=og_locale />
        <Meta property="og:type" content=og_type />

        // Twitter
        <Meta name="twitter:card" content=twitter_card />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=description />
    }
}
