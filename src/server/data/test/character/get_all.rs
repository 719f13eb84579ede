use super::*;

/// Tests listing characters in insertion order.
///
/// Expected: Ok(Vec) ordered by ID
#[tokio::test]
async fn returns_all_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::character::create_character(db).await?;
    let second = factory::character::create_character(db).await?;
    let third = factory::character::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert!(characters.is_empty());

    Ok(())
}
