use super::*;

/// Expect 201 created with an active member
#[tokio::test]
async fn returns_created_for_new_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let affiliation = test
        .affiliation()
        .insert_affiliation("City Hospital")
        .await?;

    let resp = create_member(
        State(test.to_app_state::<AppState>()),
        Json(create_dto(
            OrganizationType::Resident,
            Some(affiliation.id),
            "R001",
        )),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let member: MemberDto = read_json(resp).await;
    assert_eq!(member.member_code, "R001");
    assert_eq!(member.affiliation_id, Some(affiliation.id));
    assert_eq!(member.state, MemberState::Active);

    Ok(())
}

/// Expect 409 conflict when an active member holds the code in the same scope
#[tokio::test]
async fn returns_conflict_for_duplicate_active_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_member(OrganizationType::Resident, Some("City Hospital"), "R001")
        .build()
        .await?;
    let affiliation = test
        .affiliation()
        .get_or_insert_affiliation("City Hospital")
        .await?;

    let resp = create_member(
        State(test.to_app_state::<AppState>()),
        Json(create_dto(
            OrganizationType::Resident,
            Some(affiliation.id),
            "R001",
        )),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: ErrorDto = read_json(resp).await;
    assert!(error.error.contains("R001"));

    Ok(())
}

/// Expect 201 created when the only holder of the code is soft-deleted
#[tokio::test]
async fn returns_created_when_holder_is_deleted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    test.member()
        .insert_deleted_member(
            OrganizationType::Fellow,
            None,
            "F001",
            chrono::Utc::now().naive_utc(),
        )
        .await?;

    let resp = create_member(
        State(test.to_app_state::<AppState>()),
        Json(create_dto(OrganizationType::Fellow, None, "F001")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 for an unknown affiliation
#[tokio::test]
async fn returns_unprocessable_for_unknown_affiliation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_member(
        State(test.to_app_state::<AppState>()),
        Json(create_dto(OrganizationType::Resident, Some(42), "R001")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 422 for a blank member code
#[tokio::test]
async fn returns_unprocessable_for_blank_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_member(
        State(test.to_app_state::<AppState>()),
        Json(create_dto(OrganizationType::Resident, None, "  ")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
