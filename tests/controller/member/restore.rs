use super::*;

/// Expect 200 with the active state for a deleted member whose code is free
#[tokio::test]
async fn returns_restored_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let member = test
        .member()
        .insert_deleted_member(
            OrganizationType::Staff,
            None,
            "S001",
            chrono::Utc::now().naive_utc(),
        )
        .await?;

    let resp = restore_member(State(test.to_app_state::<AppState>()), Path(member.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let restored: MemberDto = read_json(resp).await;
    assert_eq!(restored.state, MemberState::Active);

    Ok(())
}

/// Expect 409 conflict when the code was reclaimed by another active member
#[tokio::test]
async fn returns_conflict_when_code_reclaimed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let deleted = test
        .member()
        .insert_deleted_member(
            OrganizationType::Staff,
            None,
            "S001",
            chrono::Utc::now().naive_utc(),
        )
        .await?;
    test.member()
        .insert_member(OrganizationType::Staff, None, "S001")
        .await?;

    let resp = restore_member(State(test.to_app_state::<AppState>()), Path(deleted.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let stored = test.member().get_member(deleted.id).await?.unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Expect 404 not found for an active member
#[tokio::test]
async fn returns_not_found_for_active_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let member = test
        .member()
        .insert_member(OrganizationType::Staff, None, "S001")
        .await?;

    let resp = restore_member(State(test.to_app_state::<AppState>()), Path(member.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
