use anyhow::{Context, Result};

use crate::domain::entities::country::Country;
use crate::usecase::ports::source::{CountrySource, SourceError};

const COUNTRIES_CSV: &str = include_str!("../../../data/countries.csv");

const EXPECTED_HEADER: [&str; 8] = [
    "id",
    "name",
    "iso3",
    "iso2",
    "phone_code",
    "capital",
    "currency",
    "native",
];

pub fn parse_countries_csv(raw: &str) -> Result<Vec<Country>> {
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let headers = reader
        .headers()
        .context("failed to read country csv header")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("country csv header is required")
    }
    let header_fields: Vec<&str> = headers.iter().collect();
    if header_fields != EXPECTED_HEADER {
        anyhow::bail!("unexpected country csv header: {header_fields:?}")
    }

    let mut countries = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("failed to parse country record {row_idx}"))?;

        let id: u32 = record[0]
            .parse()
            .with_context(|| format!("failed to parse id of country record {row_idx}"))?;
        let native = &record[7];

        countries.push(Country {
            id,
            name: record[1].to_string(),
            iso3: record[2].to_string(),
            iso2: record[3].to_string(),
            phone_code: record[4].to_string(),
            capital: record[5].to_string(),
            currency: record[6].to_string(),
            native: if native.is_empty() {
                None
            } else {
                Some(native.to_string())
            },
        });
    }

    Ok(countries)
}

pub struct EmbeddedCatalog;

impl CountrySource for EmbeddedCatalog {
    fn load(&self) -> Result<Vec<Country>, SourceError> {
        parse_countries_csv(COUNTRIES_CSV).map_err(|err| SourceError::Message(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_the_dataset() {
        let countries = EmbeddedCatalog.load().expect("embedded dataset should load");

        assert_eq!(countries.len(), 194, "embedded dataset should be complete");
        assert_eq!(countries[0].name, "Afghanistan");

        let japan = countries
            .iter()
            .find(|country| country.iso2 == "JP")
            .expect("dataset should contain Japan");
        assert_eq!(japan.iso3, "JPN");
        assert_eq!(japan.phone_code, "+81");
        assert_eq!(japan.capital, "Tokyo");
        assert_eq!(japan.currency, "JPY");
        assert_eq!(japan.native.as_deref(), Some("日本"));
    }

    #[test]
    fn empty_native_cell_becomes_none() {
        let countries = EmbeddedCatalog.load().expect("embedded dataset should load");

        let maldives = countries
            .iter()
            .find(|country| country.name == "Maldives")
            .expect("dataset should contain the Maldives");

        assert_eq!(maldives.native, None, "blank native cells should map to None");
    }

    #[test]
    fn rejects_an_unexpected_header() {
        let result = parse_countries_csv("id,name\n1,Nowhere\n");

        let err = result.err().expect("wrong header should be rejected");
        assert!(
            err.to_string().contains("unexpected country csv header"),
            "error should describe the header mismatch: {err}"
        );
    }

    #[test]
    fn rejects_a_non_numeric_id() {
        let raw = "id,name,iso3,iso2,phone_code,capital,currency,native\n\
                   first,Nowhere,NWH,NW,+0,Nowhere City,NWD,\n";

        let result = parse_countries_csv(raw);

        let err = result.err().expect("a non-numeric id should be rejected");
        assert!(
            err.to_string().contains("failed to parse id"),
            "error should point at the bad id: {err}"
        );
    }

    #[test]
    fn rejects_a_short_record() {
        let raw = "id,name,iso3,iso2,phone_code,capital,currency,native\n\
                   1,Nowhere,NWH\n";

        let result = parse_countries_csv(raw);

        assert!(result.is_err(), "records with missing fields should be rejected");
    }
}
