use super::*;

/// Expect 200 with the changed fields applied
#[tokio::test]
async fn returns_updated_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let member = test
        .member()
        .insert_member(OrganizationType::Resident, None, "R001")
        .await?;

    let resp = update_member(
        State(test.to_app_state::<AppState>()),
        Path(member.id),
        Json(UpdateMemberDto {
            name: Some("Dr. Grace Hopper".to_string()),
            position: Some(None),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: MemberDto = read_json(resp).await;
    assert_eq!(updated.name, "Dr. Grace Hopper");
    assert_eq!(updated.position, None);
    assert_eq!(updated.member_code, "R001");

    Ok(())
}

/// Expect 409 conflict when changing the code to one held by another active member
#[tokio::test]
async fn returns_conflict_for_code_held_in_scope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_member(OrganizationType::Resident, None, "R001")
        .build()
        .await?;
    let member = test
        .member()
        .insert_member(OrganizationType::Resident, None, "R002")
        .await?;

    let resp = update_member(
        State(test.to_app_state::<AppState>()),
        Path(member.id),
        Json(UpdateMemberDto {
            member_code: Some("R001".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 not found for a soft-deleted member
#[tokio::test]
async fn returns_not_found_for_deleted_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let member = test
        .member()
        .insert_deleted_member(
            OrganizationType::Resident,
            None,
            "R001",
            chrono::Utc::now().naive_utc(),
        )
        .await?;

    let resp = update_member(
        State(test.to_app_state::<AppState>()),
        Path(member.id),
        Json(UpdateMemberDto {
            name: Some("Dr. Grace Hopper".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 when a graduated status has no graduation date
#[tokio::test]
async fn returns_unprocessable_for_graduated_without_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let member = test
        .member()
        .insert_member(OrganizationType::Resident, None, "R001")
        .await?;

    let resp = update_member(
        State(test.to_app_state::<AppState>()),
        Path(member.id),
        Json(UpdateMemberDto {
            status: Some(MemberStatus::Graduated),
            graduated_at: Some(None),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
