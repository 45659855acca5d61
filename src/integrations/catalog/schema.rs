// src/integrations/catalog/schema.rs
//
// Wire shapes of the catalog API and their decoding into domain records

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::Character;
use crate::error::{AppError, AppResult};

/// A decoded listing response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub records: Vec<Character>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl CharacterPage {
    /// Result of a listing request that matched nothing
    pub fn empty() -> Self {
        Self::default()
    }
}

/// `{ info: {...}, results: [...] }`
#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    info: PageInfo,
    results: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    count: u32,
    pages: u32,
}

/// The batch endpoint answers a single id with a bare object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Character>),
    One(Box<Character>),
}

impl From<OneOrMany> for Vec<Character> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => vec![*record],
        }
    }
}

/// Decode a listing response. 404 is the "no match" answer.
pub fn decode_listing(status: StatusCode, body: &str) -> AppResult<CharacterPage> {
    if status == StatusCode::NOT_FOUND {
        return Ok(CharacterPage::empty());
    }
    ensure_success(status)?;

    let envelope: ListingEnvelope = parse(body)?;
    Ok(CharacterPage {
        records: envelope.results,
        total_pages: envelope.info.pages,
        total_results: envelope.info.count,
    })
}

/// Decode a batch-by-id response, normalizing a bare object into a list
pub fn decode_batch(status: StatusCode, body: &str) -> AppResult<Vec<Character>> {
    ensure_success(status)?;
    let records: OneOrMany = parse(body)?;
    Ok(records.into())
}

/// Decode a single-record response
pub fn decode_single(status: StatusCode, body: &str) -> AppResult<Character> {
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound);
    }
    ensure_success(status)?;
    parse(body)
}

fn ensure_success(status: StatusCode) -> AppResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::Http {
            status: status.as_u16(),
        })
    }
}

fn parse<T: for<'de> Deserialize<'de>>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{Character, CharacterGender, CharacterId, CharacterStatus, LocationRef};
    use chrono::{TimeZone, Utc};

    pub fn character(id: CharacterId) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            kind: String::new(),
            gender: CharacterGender::Female,
            origin: LocationRef {
                name: "Earth (C-137)".to_string(),
                url: "https://rickandmortyapi.com/api/location/1".to_string(),
            },
            location: LocationRef {
                name: "Citadel of Ricks".to_string(),
                url: "https://rickandmortyapi.com/api/location/3".to_string(),
            },
            image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
            episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
            url: format!("https://rickandmortyapi.com/api/character/{}", id),
            created: Utc.with_ymd_and_hms(2017, 11, 4, 18, 48, 46).unwrap(),
        }
    }

    pub fn characters<I: IntoIterator<Item = CharacterId>>(ids: I) -> Vec<Character> {
        ids.into_iter().map(character).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{character, characters};
    use super::*;

    fn listing_body(count: u32, pages: u32, ids: std::ops::RangeInclusive<u32>) -> String {
        serde_json::json!({
            "info": { "count": count, "pages": pages, "next": null, "prev": null },
            "results": characters(ids),
        })
        .to_string()
    }

    #[test]
    fn test_listing_adopts_envelope() {
        let body = listing_body(42, 3, 21..=40);
        let page = decode_listing(StatusCode::OK, &body).unwrap();

        assert_eq!(page.records.len(), 20);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_results, 42);
        assert_eq!(page.records[0].id, 21);
    }

    #[test]
    fn test_listing_404_is_empty_result() {
        let body = r#"{"error":"There is nothing here"}"#;
        let page = decode_listing(StatusCode::NOT_FOUND, body).unwrap();
        assert_eq!(page, CharacterPage::empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn test_listing_server_error_is_http_error() {
        let result = decode_listing(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert!(matches!(result, Err(AppError::Http { status: 500 })));
    }

    #[test]
    fn test_listing_bad_body_is_parse_error() {
        assert!(matches!(
            decode_listing(StatusCode::OK, "<html>"),
            Err(AppError::Parse(_))
        ));
        assert!(matches!(
            decode_listing(StatusCode::OK, r#"{"results": []}"#),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn test_batch_bare_object_becomes_one_element_list() {
        let body = serde_json::to_string(&character(7)).unwrap();
        let records = decode_batch(StatusCode::OK, &body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
    }

    #[test]
    fn test_batch_array_keeps_order() {
        let body = serde_json::to_string(&characters([3, 1, 2])).unwrap();
        let ids: Vec<u32> = decode_batch(StatusCode::OK, &body)
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_batch_404_is_error() {
        assert!(matches!(
            decode_batch(StatusCode::NOT_FOUND, "{}"),
            Err(AppError::Http { status: 404 })
        ));
    }

    #[test]
    fn test_single_404_is_not_found() {
        assert!(matches!(
            decode_single(StatusCode::NOT_FOUND, r#"{"error":"Character not found"}"#),
            Err(AppError::NotFound)
        ));
        let body = serde_json::to_string(&character(1)).unwrap();
        assert_eq!(decode_single(StatusCode::OK, &body).unwrap().id, 1);
    }
}
