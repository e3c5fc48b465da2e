use super::*;

/// Expect only active members of the scope unless deleted members are requested
#[tokio::test]
async fn returns_scope_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_member(OrganizationType::Resident, None, "R002")
        .with_member(OrganizationType::Resident, None, "R001")
        .with_member(OrganizationType::Fellow, None, "R001")
        .build()
        .await?;
    test.member()
        .insert_deleted_member(
            OrganizationType::Resident,
            None,
            "R001",
            chrono::Utc::now().naive_utc(),
        )
        .await?;

    let active = list_members(
        State(test.to_app_state::<AppState>()),
        Query(MemberQuery {
            organization_type: OrganizationType::Resident,
            affiliation_id: None,
            include_deleted: false,
        }),
    )
    .await
    .into_response();
    let all = list_members(
        State(test.to_app_state::<AppState>()),
        Query(MemberQuery {
            organization_type: OrganizationType::Resident,
            affiliation_id: None,
            include_deleted: true,
        }),
    )
    .await
    .into_response();

    assert_eq!(active.status(), StatusCode::OK);
    let active: Vec<MemberDto> = read_json(active).await;
    assert_eq!(
        active.iter().map(|m| m.member_code.as_str()).collect::<Vec<_>>(),
        vec!["R001", "R002"]
    );
    let all: Vec<MemberDto> = read_json(all).await;
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().filter(|m| !m.state.is_active()).count(), 1);

    Ok(())
}
