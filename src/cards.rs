//! Card view models - what the gallery shows for each country

use reqwest::Url;

use crate::constants::{CAPITAL_PLACEHOLDER, EXPLORE_PAGE};
use crate::models::Country;

/// Origin the relative explore link is resolved against while encoding
const LINK_ORIGIN: &str = "http://localhost/";

/// State of a card's favorite button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteButton {
    /// Country is not a favorite; pressing adds it
    Add,
    /// Country is a favorite; pressing removes it
    Remove,
}

impl FavoriteButton {
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteButton::Add => "☆ Add favorite",
            FavoriteButton::Remove => "★ Remove favorite",
        }
    }
}

/// Display fields for one country card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryCard {
    pub name: String,
    pub capital: String,
    pub region: String,
    pub flag_url: String,
    pub explore_link: String,
    pub favorite: FavoriteButton,
}

impl CountryCard {
    pub fn from_country(country: &Country, is_favorite: bool) -> Self {
        CountryCard {
            name: country.name.clone(),
            capital: capital_label(country.capital.as_deref()).to_string(),
            region: country.region.clone(),
            flag_url: country.flag_url.clone(),
            explore_link: explore_link(&country.name),
            favorite: favorite_button(is_favorite),
        }
    }
}

pub fn capital_label(capital: Option<&str>) -> &str {
    capital.unwrap_or(CAPITAL_PLACEHOLDER)
}

pub fn favorite_button(is_favorite: bool) -> FavoriteButton {
    if is_favorite {
        FavoriteButton::Remove
    } else {
        FavoriteButton::Add
    }
}

/// Link to the detail page, carrying the name form-encoded as `?name=`
pub fn explore_link(name: &str) -> String {
    match Url::parse_with_params(LINK_ORIGIN, &[("name", name)]) {
        Ok(url) => format!("{}?{}", EXPLORE_PAGE, url.query().unwrap_or_default()),
        Err(e) => {
            tracing::warn!(name, error = %e, "Could not encode explore link");
            String::from(EXPLORE_PAGE)
        }
    }
}

/// Cards for a page of countries, checking favorites for each one
pub fn build_cards<F>(countries: &[Country], is_favorite: F) -> Vec<CountryCard>
where
    F: Fn(&str) -> bool,
{
    countries
        .iter()
        .map(|c| CountryCard::from_country(c, is_favorite(&c.name)))
        .collect()
}
