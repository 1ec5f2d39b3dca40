//! Test harness: a live server over a migrated SQLite store, seeded per test.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::dev::ServerHandle;
use migration::{Migrator, MigratorTrait};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use api_server::telemetry::init_test_telemetry;
use api_server::{AppConfig, AppState, Application};
use blog_core::domain::{Author, Post};
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, SeaOrmPostRepository, connect};
use blog_shared::dto::{AuthorName, CreatePostRequest};

/// Posts seeded before every test.
pub const SEED_COUNT: usize = 10;

const FIRST_NAMES: &[&str] = &["Alex", "Bob", "Chris", "Dennis", "Eric"];
const LAST_NAMES: &[&str] = &["Smith", "Jones", "Williams", "Miller", "Davis"];

const TITLE_LEVELS: &[&str] = &["Senior", "Lead", "Principal", "Junior", "Chief"];
const TITLE_AREAS: &[&str] = &["Brand", "Data", "Security", "Marketing", "Quality"];
const TITLE_ROLES: &[&str] = &["Architect", "Engineer", "Strategist", "Designer", "Analyst"];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
];

fn pick(rng: &mut impl Rng, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

pub fn generate_author() -> Author {
    let mut rng = rand::thread_rng();
    Author::new(pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES))
}

pub fn generate_title() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{} {} {}",
        pick(&mut rng, TITLE_LEVELS),
        pick(&mut rng, TITLE_AREAS),
        pick(&mut rng, TITLE_ROLES)
    )
}

pub fn generate_content() -> String {
    let mut rng = rand::thread_rng();
    let sentences = rng.gen_range(2..=5);
    (0..sentences)
        .map(|_| {
            let len = rng.gen_range(4..=10);
            let words: Vec<&str> = (0..len).map(|_| pick(&mut rng, LOREM)).collect();
            let sentence = words.join(" ");
            let mut chars = sentence.chars();
            match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn generate_post() -> Post {
    Post::new(generate_author(), generate_title(), generate_content())
}

pub fn generate_post_request() -> CreatePostRequest {
    let author = generate_author();
    CreatePostRequest {
        author: Some(AuthorName {
            first_name: author.first_name,
            last_name: author.last_name,
        }),
        title: Some(generate_title()),
        content: Some(generate_content()),
    }
}

/// A running server plus a direct handle on its store.
///
/// Dropping the harness signals the server to stop, so a failing test still
/// releases it.
pub struct TestApp {
    pub address: String,
    pub posts: Arc<dyn PostRepository>,
    pub seeded: Vec<Post>,
    pub client: reqwest::Client,
    server: ServerHandle,
}

impl TestApp {
    /// Start the server on a free port over a fresh store and seed it.
    pub async fn spawn() -> Self {
        init_test_telemetry();

        let db = connect(&DatabaseConfig::sqlite_memory())
            .await
            .expect("Failed to open test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to migrate test database");
        let posts: Arc<dyn PostRepository> = Arc::new(SeaOrmPostRepository::new(db));

        let app = Application::with_state(
            &AppConfig::local(None),
            AppState::with_repository(posts.clone()),
        )
        .expect("Failed to bind test server");
        let address = format!("http://127.0.0.1:{}", app.port());
        let server = app.handle();
        tokio::spawn(app.run_until_stopped());

        let seeded = (0..SEED_COUNT).map(|_| generate_post()).collect();
        let seeded = posts
            .insert_many(seeded)
            .await
            .expect("Failed to seed posts");

        Self {
            address,
            posts,
            seeded,
            client: reqwest::Client::new(),
            server,
        }
    }

    /// Clear the store and stop the server gracefully.
    pub async fn teardown(self) {
        tracing::warn!("Deleting database");
        self.posts
            .delete_all()
            .await
            .expect("Failed to clear posts");
        self.server.stop(true).await;
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &impl Serialize) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_json(&self, path: &str, body: &impl Serialize) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Any stored post, fetched directly from the store.
    pub async fn any_post(&self) -> Post {
        self.posts
            .find_one()
            .await
            .expect("Failed to query posts")
            .expect("Store has no posts")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        // `stop` sends the command immediately; the returned future only awaits completion.
        drop(self.server.stop(false));
    }
}
