use serde::{Deserialize, Deserializer, Serialize};

use crate::map::Coordinate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Company {
    #[serde(default, deserialize_with = "nullable_text")]
    pub trade_name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub country: String,
    #[serde(default)]
    pub website: Option<String>,
    pub address: Address,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    #[serde(default, deserialize_with = "nullable_text")]
    pub address_1: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub address_2: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub suite: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub state: String,
    #[serde(default, deserialize_with = "postal_code")]
    pub postal: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One product together with the company that sells it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub product: Product,
    pub company: Company,
}

impl SearchResult {
    pub fn coordinate(&self) -> Coordinate {
        self.company.address.coordinate()
    }
}

impl Address {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Postal-style lines, skipping the parts that are empty.
    ///
    /// The locality line is `City, ST 12345`, with the comma only present when
    /// both a city and a state/postal part exist.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = [&self.address_1, &self.address_2, &self.suite]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.trim().to_string())
            .collect();

        let region = [self.state.trim(), self.postal.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let locality = match (self.city.trim(), region.as_str()) {
            ("", "") => String::new(),
            (city, "") => city.to_string(),
            ("", region) => region.to_string(),
            (city, region) => format!("{city}, {region}"),
        };
        if !locality.is_empty() {
            lines.push(locality);
        }

        if !self.country.trim().is_empty() {
            lines.push(self.country.trim().to_string());
        }
        lines
    }
}

/// Companies appearing in `results`, first occurrence wins, in result order.
pub fn distinct_companies(results: &[SearchResult]) -> Vec<&Company> {
    let mut companies: Vec<&Company> = Vec::new();
    for result in results {
        if !companies
            .iter()
            .any(|seen| seen.trade_name == result.company.trade_name)
        {
            companies.push(&result.company);
        }
    }
    companies
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// The directory spreadsheet stores ZIP codes as floats, so postal codes show up
// either as numbers or as strings like "10001.0".
fn postal_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Postal {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<Postal>::deserialize(deserializer)? {
        None => String::new(),
        Some(Postal::Number(n)) if n.is_finite() => format!("{}", n.floor() as i64),
        Some(Postal::Number(_)) => String::new(),
        Some(Postal::Text(text)) => normalize_postal(&text),
    })
}

fn normalize_postal(text: &str) -> String {
    let text = text.trim();
    match text.split_once('.') {
        Some((whole, fraction))
            if !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c == '0') =>
        {
            whole.to_string()
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            address_1: "12 Orchard Rd".into(),
            address_2: String::new(),
            suite: "Unit 4".into(),
            city: "Newark".into(),
            state: "NJ".into(),
            postal: "07102".into(),
            country: "USA".into(),
            latitude: 40.1,
            longitude: -74.2,
        }
    }

    #[test]
    fn lines_skip_empty_parts() {
        assert_eq!(
            address().lines(),
            vec!["12 Orchard Rd", "Unit 4", "Newark, NJ 07102", "USA"]
        );
    }

    #[test]
    fn locality_without_city_has_no_comma() {
        let address = Address {
            city: String::new(),
            ..address()
        };
        assert_eq!(address.lines()[2], "NJ 07102");
    }

    #[test]
    fn empty_address_has_no_lines() {
        let address = Address {
            address_1: String::new(),
            suite: String::new(),
            city: String::new(),
            state: String::new(),
            postal: String::new(),
            country: String::new(),
            ..address()
        };
        assert!(address.lines().is_empty());
    }

    #[test]
    fn decodes_sparse_record() {
        let json = r#"{
            "product": {"id": 1, "name": "Tomato", "description": "Heirloom"},
            "company": {"trade_name": "Acme Farms", "address": {"latitude": 40.1, "longitude": -74.2}}
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.company.trade_name, "Acme Farms");
        assert_eq!(result.company.country, "");
        assert_eq!(result.company.address.postal, "");
        assert_eq!(result.coordinate(), Coordinate::new(40.1, -74.2));
    }

    #[test]
    fn decodes_nulls_as_empty_text() {
        let json = r#"{
            "address_1": "1 Farm Ln", "address_2": null, "suite": null,
            "city": "Ithaca", "state": "NY", "postal": null, "country": null,
            "latitude": 42.4, "longitude": -76.5
        }"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert_eq!(address.address_2, "");
        assert_eq!(address.lines(), vec!["1 Farm Ln", "Ithaca, NY"]);
    }

    #[test]
    fn float_postal_codes_are_normalized() {
        let number: Address = serde_json::from_str(
            r#"{"postal": 14850.0, "latitude": 0.0, "longitude": 0.0}"#,
        )
        .unwrap();
        assert_eq!(number.postal, "14850");

        let text: Address = serde_json::from_str(
            r#"{"postal": "02134.0", "latitude": 0.0, "longitude": 0.0}"#,
        )
        .unwrap();
        assert_eq!(text.postal, "02134");

        let canadian: Address = serde_json::from_str(
            r#"{"postal": "K1A 0B1", "latitude": 0.0, "longitude": 0.0}"#,
        )
        .unwrap();
        assert_eq!(canadian.postal, "K1A 0B1");
    }

    #[test]
    fn distinct_companies_keeps_first_occurrence() {
        let result = |id: i64, company: &str| SearchResult {
            product: Product {
                id,
                name: format!("product {id}"),
                description: String::new(),
            },
            company: Company {
                trade_name: company.into(),
                country: "USA".into(),
                website: None,
                address: address(),
            },
        };
        let results = vec![result(1, "Acme"), result(2, "Bowery"), result(3, "Acme")];

        let names: Vec<_> = distinct_companies(&results)
            .into_iter()
            .map(|c| c.trade_name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "Bowery"]);
    }
}
