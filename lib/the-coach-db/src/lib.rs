use sqlx::migrate::MigrateError;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::types::chrono::Utc;
use sqlx::{Error, Pool, Sqlite};

// Re-export so that clients can avoid having sqlx as a dependency
pub use sqlx::sqlite::SqlitePoolOptions;

pub mod model;

/// Wrapper around common database operations. By using this wrapper, clients
/// of [`DbHandler`] can remain database agnostic.
#[derive(Debug, Clone)]
pub struct DbHandler {
    pool: Pool<Sqlite>,
}

impl DbHandler {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Apply the embedded migrations.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Get a guild from the database given its ID.
    pub async fn get_guild(&self, guild_id: u64) -> Result<Option<model::Guild>, Error> {
        sqlx::query_as("SELECT * FROM guild WHERE id = ?")
            .bind(guild_id as i64)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert guild data
    pub async fn insert_guild(&self, guild_id: u64) -> Result<SqliteQueryResult, Error> {
        sqlx::query("INSERT OR IGNORE INTO guild (id) VALUES (?)")
            .bind(guild_id as i64)
            .execute(&self.pool)
            .await
    }

    /// Delete guild data, including the players it watches.
    pub async fn delete_guild(&self, guild_id: u64) -> Result<SqliteQueryResult, Error> {
        sqlx::query("DELETE FROM guild WHERE id = ?")
            .bind(guild_id as i64)
            .execute(&self.pool)
            .await
    }

    /// Set or clear the notification channel of a guild.
    pub async fn update_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<SqliteQueryResult, Error> {
        sqlx::query("UPDATE guild SET channel_id = ? WHERE id = ?")
            .bind(channel_id.map(|id| id as i64))
            .bind(guild_id as i64)
            .execute(&self.pool)
            .await
    }

    /// Clear every notification channel pointing at a deleted channel.
    pub async fn delete_channel(&self, channel_id: u64) -> Result<SqliteQueryResult, Error> {
        sqlx::query("UPDATE guild SET channel_id = NULL WHERE channel_id = ?")
            .bind(channel_id as i64)
            .execute(&self.pool)
            .await
    }

    /// Insert a player, or refresh the name of a known one.
    pub async fn upsert_player(
        &self,
        steam64_id: &str,
        name: &str,
    ) -> Result<SqliteQueryResult, Error> {
        let now = Utc::now().naive_utc();
        sqlx::query(
            "INSERT INTO player (steam64_id, name, create_time) VALUES (?, ?, ?)
            ON CONFLICT (steam64_id) DO UPDATE SET name = excluded.name",
        )
        .bind(steam64_id)
        .bind(name)
        .bind(now)
        .execute(&self.pool)
        .await
    }

    /// Get a player from the database given the Steam64 ID.
    pub async fn get_player(&self, steam64_id: &str) -> Result<Option<model::Player>, Error> {
        sqlx::query_as("SELECT * FROM player WHERE steam64_id = ?")
            .bind(steam64_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Get every player watched by at least one guild.
    pub async fn get_watched_players(&self) -> Result<Vec<model::Player>, Error> {
        sqlx::query_as(
            "SELECT DISTINCT player.* FROM player
            INNER JOIN guild_watch ON guild_watch.steam64_id = player.steam64_id
            ORDER BY player.steam64_id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn update_last_match_id(
        &self,
        steam64_id: &str,
        match_id: &str,
    ) -> Result<SqliteQueryResult, Error> {
        sqlx::query("UPDATE player SET last_match_id = ? WHERE steam64_id = ?")
            .bind(match_id)
            .bind(steam64_id)
            .execute(&self.pool)
            .await
    }

    /// Link a Discord user to a player, replacing any previous link. The
    /// player must already exist.
    pub async fn upsert_link(
        &self,
        discord_user_id: u64,
        steam64_id: &str,
    ) -> Result<SqliteQueryResult, Error> {
        let now = Utc::now().naive_utc();
        sqlx::query(
            "INSERT INTO player_link (discord_user_id, steam64_id, create_time) VALUES (?, ?, ?)
            ON CONFLICT (discord_user_id) DO UPDATE
            SET steam64_id = excluded.steam64_id, create_time = excluded.create_time",
        )
        .bind(discord_user_id as i64)
        .bind(steam64_id)
        .bind(now)
        .execute(&self.pool)
        .await
    }

    pub async fn get_link(
        &self,
        discord_user_id: u64,
    ) -> Result<Option<model::PlayerLink>, Error> {
        sqlx::query_as("SELECT * FROM player_link WHERE discord_user_id = ?")
            .bind(discord_user_id as i64)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn delete_link(&self, discord_user_id: u64) -> Result<SqliteQueryResult, Error> {
        sqlx::query("DELETE FROM player_link WHERE discord_user_id = ?")
            .bind(discord_user_id as i64)
            .execute(&self.pool)
            .await
    }

    /// Make a guild watch a player. Affects no rows if it already does.
    pub async fn insert_guild_watch(
        &self,
        guild_id: u64,
        steam64_id: &str,
    ) -> Result<SqliteQueryResult, Error> {
        sqlx::query("INSERT OR IGNORE INTO guild_watch (guild_id, steam64_id) VALUES (?, ?)")
            .bind(guild_id as i64)
            .bind(steam64_id)
            .execute(&self.pool)
            .await
    }

    pub async fn delete_guild_watch(
        &self,
        guild_id: u64,
        steam64_id: &str,
    ) -> Result<SqliteQueryResult, Error> {
        sqlx::query("DELETE FROM guild_watch WHERE guild_id = ? AND steam64_id = ?")
            .bind(guild_id as i64)
            .bind(steam64_id)
            .execute(&self.pool)
            .await
    }

    /// Get the players a guild watches.
    pub async fn get_guild_watches(&self, guild_id: u64) -> Result<Vec<model::Player>, Error> {
        sqlx::query_as(
            "SELECT player.* FROM guild_watch
            INNER JOIN player ON player.steam64_id = guild_watch.steam64_id
            WHERE guild_watch.guild_id = ? ORDER BY player.name",
        )
        .bind(guild_id as i64)
        .fetch_all(&self.pool)
        .await
    }

    /// Get the guilds watching a player.
    pub async fn get_watching_guilds(&self, steam64_id: &str) -> Result<Vec<model::Guild>, Error> {
        sqlx::query_as(
            "SELECT guild.* FROM guild_watch
            INNER JOIN guild ON guild.id = guild_watch.guild_id
            WHERE guild_watch.steam64_id = ?",
        )
        .bind(steam64_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert match data. A match already stored for the player is ignored.
    pub async fn insert_player_match(
        &self,
        data: &model::PlayerMatch,
    ) -> Result<SqliteQueryResult, Error> {
        sqlx::query(
            "INSERT OR IGNORE INTO player_match (match_id, steam64_id, finished_at, map_name, outcome,
            leetify_rating, premier_rank, accuracy_enemy_spotted, accuracy_head, spray_accuracy, preaim,
            reaction_time_ms) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&data.match_id)
        .bind(&data.steam64_id)
        .bind(data.finished_at)
        .bind(&data.map_name)
        .bind(&data.outcome)
        .bind(data.leetify_rating)
        .bind(data.premier_rank)
        .bind(data.accuracy_enemy_spotted)
        .bind(data.accuracy_head)
        .bind(data.spray_accuracy)
        .bind(data.preaim)
        .bind(data.reaction_time_ms)
        .execute(&self.pool)
        .await
    }

    pub async fn get_player_match(
        &self,
        steam64_id: &str,
        match_id: &str,
    ) -> Result<Option<model::PlayerMatch>, Error> {
        sqlx::query_as("SELECT * FROM player_match WHERE steam64_id = ? AND match_id = ?")
            .bind(steam64_id)
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
    }
}
