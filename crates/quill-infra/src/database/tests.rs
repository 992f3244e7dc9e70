#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use quill_core::domain::NewPost;
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn model(id: i64, title: &str, content: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            timestamp: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        // Create mock database with expected query results
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, "Test Post", "Content")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(7).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.id, 7);
        assert_eq!(found.title, "Test Post");
    }

    #[tokio::test]
    async fn test_find_missing_post_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_recent_maps_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(2, "Newer", "Content"),
                model(1, "Older", "Content"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let listed = repo.list_recent().await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Hello", "World")]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let created = repo
            .create(NewPost::new("Hello".into(), "World".into()))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Hello");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        // The lookup before the update comes back empty
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo
            .update(9, "Title".into(), "Body".into())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_update_rewrites_title_and_content() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![model(3, "Old title", "Old body")],
                vec![model(3, "New title", "New body")],
            ])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let updated = repo
            .update(3, "New title".into(), "New body".into())
            .await
            .unwrap();
        assert_eq!(updated.id, 3);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.content, "New body");
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo.delete(9).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_existing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        repo.delete(3).await.unwrap();
    }
}
