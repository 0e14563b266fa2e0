use serde::Deserialize;

/// A country as shown in the gallery
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "ApiCountry")]
pub struct Country {
    /// Common name, unique across the list
    pub name: String,
    pub capital: Option<String>,
    pub region: String,
    pub flag_url: String,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        capital: Option<&str>,
        region: impl Into<String>,
        flag_url: impl Into<String>,
    ) -> Self {
        Country {
            name: name.into(),
            capital: capital.map(String::from),
            region: region.into(),
            flag_url: flag_url.into(),
        }
    }
}

/// Record shape returned by the countries endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct ApiCountry {
    pub name: ApiName,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: String,
    pub flags: ApiFlags,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiName {
    pub common: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiFlags {
    #[serde(default)]
    pub svg: String,
}

impl From<ApiCountry> for Country {
    fn from(raw: ApiCountry) -> Self {
        Country {
            name: raw.name.common,
            capital: raw.capital.and_then(|list| list.into_iter().next()),
            region: raw.region,
            flag_url: raw.flags.svg,
        }
    }
}
