use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::domain::MetaFields;

/// Pulls the analyzed meta fields out of a parsed document.
///
/// Whitespace is trimmed and empty values are mapped to `None`, so the
/// checks never see a present-but-blank field.
pub struct MetaExtractor;

impl MetaExtractor {
    pub fn extract(html: &Html) -> MetaFields {
        MetaFields {
            title: Self::extract_title(html),
            meta_description: Self::extract_meta_name(html, MetaName::Description),
            og_title: Self::extract_meta_property(html, OgProperty::Title),
            og_description: Self::extract_meta_property(html, OgProperty::Description),
            og_image: Self::extract_meta_property(html, OgProperty::Image),
            og_site_name: Self::extract_meta_property(html, OgProperty::SiteName),
            twitter_card: Self::extract_meta_name(html, MetaName::TwitterCard),
            twitter_title: Self::extract_meta_name(html, MetaName::TwitterTitle),
            twitter_description: Self::extract_meta_name(html, MetaName::TwitterDescription),
            twitter_image: Self::extract_meta_name(html, MetaName::TwitterImage),
        }
    }

    pub fn extract_title(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
        html.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn extract_meta_name(html: &Html, name: MetaName) -> Option<String> {
        let selector = name.selector();
        Self::meta_content(html, selector)
    }

    fn extract_meta_property(html: &Html, property: OgProperty) -> Option<String> {
        let selector = property.selector();
        Self::meta_content(html, selector)
    }

    fn meta_content(html: &Html, selector: &Selector) -> Option<String> {
        html.select(selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// `meta[name=...]` fields.
#[derive(Debug, Clone, Copy)]
enum MetaName {
    Description,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
}

impl MetaName {
    fn selector(self) -> &'static Selector {
        static DESCRIPTION: OnceLock<Selector> = OnceLock::new();
        static TWITTER_CARD: OnceLock<Selector> = OnceLock::new();
        static TWITTER_TITLE: OnceLock<Selector> = OnceLock::new();
        static TWITTER_DESCRIPTION: OnceLock<Selector> = OnceLock::new();
        static TWITTER_IMAGE: OnceLock<Selector> = OnceLock::new();

        let (cell, css) = match self {
            Self::Description => (&DESCRIPTION, "meta[name='description']"),
            Self::TwitterCard => (&TWITTER_CARD, "meta[name='twitter:card']"),
            Self::TwitterTitle => (&TWITTER_TITLE, "meta[name='twitter:title']"),
            Self::TwitterDescription => {
                (&TWITTER_DESCRIPTION, "meta[name='twitter:description']")
            }
            Self::TwitterImage => (&TWITTER_IMAGE, "meta[name='twitter:image']"),
        };
        cell.get_or_init(|| Selector::parse(css).unwrap())
    }
}

/// `meta[property=og:...]` fields.
#[derive(Debug, Clone, Copy)]
enum OgProperty {
    Title,
    Description,
    Image,
    SiteName,
}

impl OgProperty {
    fn selector(self) -> &'static Selector {
        static TITLE: OnceLock<Selector> = OnceLock::new();
        static DESCRIPTION: OnceLock<Selector> = OnceLock::new();
        static IMAGE: OnceLock<Selector> = OnceLock::new();
        static SITE_NAME: OnceLock<Selector> = OnceLock::new();

        let (cell, css) = match self {
            Self::Title => (&TITLE, "meta[property='og:title']"),
            Self::Description => (&DESCRIPTION, "meta[property='og:description']"),
            Self::Image => (&IMAGE, "meta[property='og:image']"),
            Self::SiteName => (&SITE_NAME, "meta[property='og:site_name']"),
        };
        cell.get_or_init(|| Selector::parse(css).unwrap())
    }
}
