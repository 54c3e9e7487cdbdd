//! Zone Repository

use super::{RepoError, RepoResult};
use shared::models::Zone;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Zone>> {
    let zones = sqlx::query_as::<_, Zone>("SELECT id, name, active FROM zone ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    Ok(zones)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Zone>> {
    let zone = sqlx::query_as::<_, Zone>("SELECT id, name, active FROM zone WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(zone)
}

/// Insert a zone and return the id assigned by the database
pub async fn create(pool: &SqlitePool, name: &str, active: bool) -> RepoResult<i64> {
    let id: i64 = sqlx::query_scalar("INSERT INTO zone (name, active) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(active)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: i64, name: &str, active: bool) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE zone SET name = ?1, active = ?2 WHERE id = ?3")
        .bind(name)
        .bind(active)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Zone {id} not found")));
    }
    Ok(())
}

pub async fn set_active(pool: &SqlitePool, id: i64, active: bool) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE zone SET active = ? WHERE id = ?")
        .bind(active)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Zone {id} not found")));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM zone WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Zone {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let pool = test_pool().await;

        let first = create(&pool, "Europe", true).await.unwrap();
        let second = create(&pool, "Asia", false).await.unwrap();

        assert!(first > 0);
        assert!(second > first);

        let zone = find_by_id(&pool, second).await.unwrap().unwrap();
        assert_eq!(zone.name, "Asia");
        assert!(!zone.active);
    }

    #[tokio::test]
    async fn test_find_all_orders_by_name() {
        let pool = test_pool().await;
        create(&pool, "Oceania", true).await.unwrap();
        create(&pool, "Africa", true).await.unwrap();
        create(&pool, "North America", false).await.unwrap();

        let names: Vec<String> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|z| z.name)
            .collect();
        assert_eq!(names, vec!["Africa", "North America", "Oceania"]);
    }

    #[tokio::test]
    async fn test_update_and_set_active() {
        let pool = test_pool().await;
        let id = create(&pool, "Europe", false).await.unwrap();

        update(&pool, id, "Europe (EU)", false).await.unwrap();
        set_active(&pool, id, true).await.unwrap();

        let zone = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(zone.name, "Europe (EU)");
        assert!(zone.active);
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let pool = test_pool().await;

        assert!(find_by_id(&pool, 42).await.unwrap().is_none());
        assert!(matches!(
            update(&pool, 42, "x", true).await,
            Err(RepoError::NotFound(_))
        ));
        assert!(matches!(
            set_active(&pool, 42, true).await,
            Err(RepoError::NotFound(_))
        ));
        assert!(matches!(delete(&pool, 42).await, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let pool = test_pool().await;
        let id = create(&pool, "Central America", true).await.unwrap();

        delete(&pool, id).await.unwrap();

        assert!(find_by_id(&pool, id).await.unwrap().is_none());
    }
}
