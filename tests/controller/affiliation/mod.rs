use roster::{
    model::affiliation::{AffiliationDto, CreateAffiliationDto},
    server::controller::affiliation::{create_affiliation, get_affiliation, list_affiliations},
};

use super::*;

/// Expect 201 created with the stored affiliation
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_affiliation(
        State(test.to_app_state::<AppState>()),
        Json(CreateAffiliationDto {
            name: "City Hospital".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let affiliation: AffiliationDto = read_json(resp).await;
    assert_eq!(affiliation.name, "City Hospital");

    Ok(())
}

/// Expect 409 conflict for a name that already exists
#[tokio::test]
async fn create_returns_conflict_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_affiliation("City Hospital")
        .build()
        .await?;

    let resp = create_affiliation(
        State(test.to_app_state::<AppState>()),
        Json(CreateAffiliationDto {
            name: "City Hospital".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 422 for a blank name
#[tokio::test]
async fn create_returns_unprocessable_for_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_affiliation(
        State(test.to_app_state::<AppState>()),
        Json(CreateAffiliationDto {
            name: "   ".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 200 with an existing affiliation and 404 for an unknown ID
#[tokio::test]
async fn get_returns_affiliation_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let affiliation = test
        .affiliation()
        .insert_affiliation("City Hospital")
        .await?;

    let found = get_affiliation(State(test.to_app_state::<AppState>()), Path(affiliation.id))
        .await
        .into_response();
    let missing = get_affiliation(
        State(test.to_app_state::<AppState>()),
        Path(affiliation.id + 1),
    )
    .await
    .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with affiliations ordered by name
#[tokio::test]
async fn list_returns_affiliations_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_affiliation("University Clinic")
        .with_affiliation("City Hospital")
        .build()
        .await?;

    let resp = list_affiliations(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let affiliations: Vec<AffiliationDto> = read_json(resp).await;
    assert_eq!(
        affiliations.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        vec!["City Hospital", "University Clinic"]
    );

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn list_returns_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = list_affiliations(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
