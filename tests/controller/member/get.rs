use super::*;

/// Expect 200 with the deleted state for a soft-deleted member
#[tokio::test]
async fn returns_deleted_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let member = test
        .member()
        .insert_deleted_member(
            OrganizationType::Trainee,
            None,
            "T001",
            chrono::Utc::now().naive_utc(),
        )
        .await?;
    let deleted_at = member.deleted_at.unwrap();

    let resp = get_member(State(test.to_app_state::<AppState>()), Path(member.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let found: MemberDto = read_json(resp).await;
    assert_eq!(found.state, MemberState::Deleted { at: deleted_at });

    Ok(())
}

/// Expect 404 not found for a member that does not exist
#[tokio::test]
async fn returns_not_found_for_unknown_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_member(State(test.to_app_state::<AppState>()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
