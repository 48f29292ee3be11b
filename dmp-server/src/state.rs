//! Application state

use sqlx::PgPool;

use crate::auth::jwt::JwtService;
use crate::booking::projector::OccupancyPolicy;
use crate::booking::service::BookingService;
use crate::config::Config;
use crate::db::bookings::PgBookingRepository;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// JWT encode/decode service
    pub jwt: JwtService,
    /// Booking use-cases over the Postgres repository
    pub bookings: BookingService<PgBookingRepository>,
    /// Which booking statuses make a zone read as occupied
    pub occupancy_policy: OccupancyPolicy,
    /// Shared secret gating admin account registration
    pub admin_secret: String,
}

impl AppState {
    /// Create a new AppState: connect to Postgres and run pending migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiration_minutes);
        let bookings = BookingService::new(PgBookingRepository::new(pool.clone()));

        Ok(Self {
            pool,
            jwt,
            bookings,
            occupancy_policy: config.occupancy_policy,
            admin_secret: config.admin_secret.clone(),
        })
    }
}
