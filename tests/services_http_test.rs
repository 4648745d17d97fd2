use httpmock::prelude::*;
use serde_json::json;
use usagov::{
    AmendmentDetail, AmendmentQuery, AmendmentType, BillDetail, BillQuery, BillType, Client,
    CongressQuery, HearingQuery, LawQuery, LawType, MemberDetail, MemberQuery, Paginated,
    Service, SummaryQuery, TreatyDetail, TreatyQuery, UsaGovError,
};

fn client(server: &MockServer) -> Client {
    Client::new("test_api_key", server.base_url())
}

#[tokio::test]
async fn test_bill_request_with_details() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/bill/117/hr/123/actions")
            .header("X-API-Key", "test_api_key")
            .query_param("limit", "5")
            .query_param("sort", "asc");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"data": "test_data"}));
    });

    let query = BillQuery::new()
        .bill("123")
        .bill_type(BillType::Hr)
        .congress(117)
        .details(BillDetail::Actions)
        .limit(5)
        .sort("asc");

    let response = client(&server).bill().bill(&query).await.unwrap();

    api_mock.assert();
    assert_eq!(response, json!({"data": "test_data"}));
}

#[tokio::test]
async fn test_bill_empty_response() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/bill");
        then.status(200).json_body(json!({}));
    });

    let response = client(&server).bill().bill(&BillQuery::new()).await.unwrap();

    api_mock.assert();
    assert_eq!(response, json!({}));
}

#[tokio::test]
async fn test_bill_invalid_response() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/bill/117/hr/123");
        then.status(404);
    });

    let query = BillQuery::new().bill("123").bill_type(BillType::Hr).congress(117);
    let err = client(&server).bill().bill(&query).await.unwrap_err();

    api_mock.assert();
    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, UsaGovError::ApiStatusError { .. }));
}

#[tokio::test]
async fn test_amendment_composite_id() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/amendment/117/hamdt/123/text")
            .query_param("offset", "10");
        then.status(200).json_body(json!({"data": "test_data"}));
    });

    let query = AmendmentQuery::new()
        .composite_id("117-hamdt-123")
        .details(AmendmentDetail::Text)
        .offset(10);
    let response = client(&server).amendment().amendment(&query).await.unwrap();

    api_mock.assert();
    assert_eq!(response["data"], "test_data");
}

#[tokio::test]
async fn test_amendment_invalid_response() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/amendment/117/hamdt/123");
        then.status(500);
    });

    let query = AmendmentQuery::new()
        .amendment_number("123")
        .amendment_type(AmendmentType::HAmdt)
        .congress(117);
    let err = client(&server).amendment().amendment(&query).await.unwrap_err();

    api_mock.assert();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_current_congress() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/congress/current");
        then.status(200)
            .json_body(json!({"congress": {"number": 118}}));
    });

    let response = client(&server)
        .congress()
        .congress(&CongressQuery::new().current())
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(response["congress"]["number"], 118);
}

#[tokio::test]
async fn test_hearing_list() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hearing/118")
            .query_param("limit", "2");
        then.status(200).json_body(json!({"hearings": []}));
    });

    let response = client(&server)
        .hearing()
        .hearing(&HearingQuery::new().congress(118).limit(2))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(response, json!({"hearings": []}));
}

#[tokio::test]
async fn test_law_composite_id_and_law_type() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/law/117/pub/123");
        then.status(200).json_body(json!({"data": "test_data"}));
    });

    let query = LawQuery::new()
        .composite_id("117-123")
        .law_type(LawType::Public);
    let response = client(&server).law().law(&query).await.unwrap();

    api_mock.assert();
    assert_eq!(response, json!({"data": "test_data"}));
}

#[tokio::test]
async fn test_law_missing_congress_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({}));
    });

    let err = client(&server)
        .law()
        .law(&LawQuery::new().limit(5))
        .await
        .unwrap_err();

    assert_eq!(api_mock.hits(), 0);
    assert!(matches!(err, UsaGovError::MissingParameterError { .. }));
}

#[tokio::test]
async fn test_member_sponsored_legislation() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/member/A000360/sponsored-legislation")
            .header("X-API-Key", "test_api_key");
        then.status(200)
            .json_body(json!({"data": "test_member_details_data"}));
    });

    let query = MemberQuery::new()
        .member_id("A000360")
        .details(MemberDetail::Sponsor);
    let response = client(&server).member().member(&query).await.unwrap();

    api_mock.assert();
    assert_eq!(response["data"], "test_member_details_data");
}

#[tokio::test]
async fn test_member_by_congress_state_and_district() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/member/congress/117/CA/12");
        then.status(200)
            .json_body(json!({"data": "test_congressional_member_data"}));
    });

    let query = MemberQuery::new().congress(117).state("CA").district(12);
    client(&server).member().member(&query).await.unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_summary_with_date_range() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/summaries/117/hr")
            .query_param("fromDateTime", "2022-04-01T00:00:00Z")
            .query_param("toDateTime", "2022-04-03T00:00:00Z");
        then.status(200).json_body(json!({"summaries": []}));
    });

    let from = "2022-04-01T00:00:00Z".parse().unwrap();
    let to = "2022-04-03T00:00:00Z".parse().unwrap();
    let query = SummaryQuery::new()
        .congress(117)
        .bill_type(BillType::Hr)
        .from_datetime(from)
        .to_datetime(to);
    client(&server).summary().summary(&query).await.unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_treaty_with_details() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/treaty/117/456/actions");
        then.status(200)
            .json_body(json!({"data": "test_treaty_details_data"}));
    });

    let query = TreatyQuery::new()
        .congress(117)
        .treaty(456)
        .details(TreatyDetail::Actions);
    let response = client(&server).treaty().treaty(&query).await.unwrap();

    api_mock.assert();
    assert_eq!(response["data"], "test_treaty_details_data");
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/treaty/117");
        then.status(403).json_body(json!({
            "error": {"code": "API_KEY_INVALID", "message": "An invalid api_key was supplied."}
        }));
    });

    let err = client(&server)
        .treaty()
        .treaty(&TreatyQuery::new().congress(117))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_friendly_message(),
        "The API rejected the request (403): An invalid api_key was supplied."
    );
}

#[test]
fn test_law_request_carries_no_extra_query() {
    let client = Client::new("test_api_key", "https://api.congress.gov/v3");
    let service = client.law();

    let prepared = service
        .prepare(&LawQuery::new().composite_id("117-123").law_type(LawType::Public))
        .unwrap();
    let request = service.base().build_request(&prepared).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.congress.gov/v3/law/117/pub/123"
    );

    let prepared = service
        .prepare(&LawQuery::new().congress(117).law_type(LawType::Public).limit(5))
        .unwrap();
    let request = service.base().build_request(&prepared).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.congress.gov/v3/law/117/pub?limit=5"
    );
}
