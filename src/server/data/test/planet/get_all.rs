use super::*;

/// Tests listing planets in insertion order.
///
/// Expected: Ok(Vec) ordered by ID
#[tokio::test]
async fn returns_all_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::planet::create_planet(db).await?;
    let second = factory::planet::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
