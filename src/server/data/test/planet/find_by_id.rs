use super::*;

/// Tests fetching a planet by ID.
///
/// Uses a population past `i32::MAX` so the 64-bit column is exercised.
///
/// Expected: Ok(Some(Planet))
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Coruscant")
        .population(1_000_000_000_000)
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(planet.name, "Coruscant");
    assert_eq!(planet.population, 1_000_000_000_000);

    Ok(())
}

/// Tests fetching an ID with no planet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(7).await?;

    assert!(planet.is_none());

    Ok(())
}
