//! PostgreSQL-backed `RoomRepository` implementation using Diesel ORM.
//!
//! Room writes are transactional: the room row and its amenity links commit
//! together. An unresolved amenity id aborts the transaction, so a partially
//! attached room is never observable.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{Amenity, Category, Room, RoomDraft, RoomPatch, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    AmenityRow, CategoryRow, NewRoomAmenityRow, NewRoomRow, RoomChangeset, RoomRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{amenities, categories, room_amenities, rooms};

/// Diesel-backed implementation of the room repository port.
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failure inside a room write transaction.
///
/// Diesel's `transaction` rolls back on any error; this enum keeps the
/// amenity-resolution failure distinguishable from plain database errors so
/// it can surface as [`RoomRepositoryError::AmenityNotFound`] after rollback.
enum RoomTxError {
    Diesel(diesel::result::Error),
    AmenityNotFound(Uuid),
    Corrupt(String),
}

impl From<diesel::result::Error> for RoomTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn map_tx_error(error: RoomTxError) -> RoomRepositoryError {
    match error {
        RoomTxError::Diesel(err) => map_query_error(err),
        RoomTxError::AmenityNotFound(id) => RoomRepositoryError::amenity_not_found(id),
        RoomTxError::Corrupt(message) => RoomRepositoryError::query(message),
    }
}

fn map_checkout_error(error: PoolError) -> RoomRepositoryError {
    map_pool_error(error, RoomRepositoryError::connection)
}

fn map_query_error(error: diesel::result::Error) -> RoomRepositoryError {
    map_diesel_error(
        error,
        RoomRepositoryError::query,
        RoomRepositoryError::connection,
    )
}

fn row_to_category(row: CategoryRow) -> Result<Category, RoomTxError> {
    let kind = row
        .kind
        .parse()
        .map_err(|_| RoomTxError::Corrupt(format!("unknown stored category kind: {}", row.kind)))?;
    Ok(Category {
        id: row.id,
        name: row.name,
        kind,
    })
}

fn row_to_amenity(row: AmenityRow) -> Amenity {
    Amenity {
        id: row.id,
        name: row.name,
        description: row.description,
    }
}

/// Convert database rows into a hydrated domain room.
fn assemble_room(
    row: RoomRow,
    category: CategoryRow,
    amenity_rows: Vec<AmenityRow>,
) -> Result<Room, RoomTxError> {
    let kind = row
        .kind
        .parse()
        .map_err(|_| RoomTxError::Corrupt(format!("unknown stored room kind: {}", row.kind)))?;
    let category = row_to_category(category)?;
    let mut amenities: Vec<Amenity> = amenity_rows.into_iter().map(row_to_amenity).collect();
    amenities.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Room {
        id: row.id,
        owner_id: UserId::from_uuid(row.owner_id),
        name: row.name,
        country: row.country,
        city: row.city,
        price: row.price,
        rooms: row.rooms,
        toilets: row.toilets,
        description: row.description,
        address: row.address,
        pet_friendly: row.pet_friendly,
        kind,
        category,
        amenities,
    })
}

/// Load the amenity rows behind `ids`, failing on the first id with no row.
async fn resolve_amenities(
    conn: &mut AsyncPgConnection,
    ids: &[Uuid],
) -> Result<Vec<AmenityRow>, RoomTxError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<AmenityRow> = amenities::table
        .filter(amenities::id.eq_any(ids))
        .select(AmenityRow::as_select())
        .load(conn)
        .await?;

    let found: HashSet<Uuid> = rows.iter().map(|row| row.id).collect();
    if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
        return Err(RoomTxError::AmenityNotFound(*missing));
    }
    Ok(rows)
}

/// Replace the amenity link set for a room inside the current transaction.
async fn replace_amenity_links(
    conn: &mut AsyncPgConnection,
    room_id: Uuid,
    ids: &[Uuid],
) -> Result<Vec<AmenityRow>, RoomTxError> {
    let resolved = resolve_amenities(conn, ids).await?;

    diesel::delete(room_amenities::table.filter(room_amenities::room_id.eq(room_id)))
        .execute(conn)
        .await?;

    let links: Vec<NewRoomAmenityRow> = resolved
        .iter()
        .map(|row| NewRoomAmenityRow {
            room_id,
            amenity_id: row.id,
        })
        .collect();
    diesel::insert_into(room_amenities::table)
        .values(&links)
        .execute(conn)
        .await?;

    Ok(resolved)
}

async fn load_category(
    conn: &mut AsyncPgConnection,
    category_id: Uuid,
) -> Result<CategoryRow, RoomTxError> {
    categories::table
        .filter(categories::id.eq(category_id))
        .select(CategoryRow::as_select())
        .first(conn)
        .await
        .map_err(RoomTxError::from)
}

/// Load and hydrate one room by id within an existing connection.
async fn load_room(
    conn: &mut AsyncPgConnection,
    room_id: Uuid,
) -> Result<Option<Room>, RoomTxError> {
    let row: Option<RoomRow> = rooms::table
        .filter(rooms::id.eq(room_id))
        .select(RoomRow::as_select())
        .first(conn)
        .await
        .optional()?;
    let Some(row) = row else {
        return Ok(None);
    };

    let category = load_category(conn, row.category_id).await?;
    let amenity_rows: Vec<AmenityRow> = room_amenities::table
        .inner_join(amenities::table)
        .filter(room_amenities::room_id.eq(room_id))
        .select(AmenityRow::as_select())
        .load(conn)
        .await?;

    assemble_room(row, category, amenity_rows).map(Some)
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn create(
        &self,
        owner_id: UserId,
        draft: RoomDraft,
        category_id: Uuid,
        amenity_ids: Vec<Uuid>,
    ) -> Result<Room, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        conn.transaction::<Room, RoomTxError, _>(|conn| {
            let draft = &draft;
            let owner_id = &owner_id;
            let amenity_ids = &amenity_ids;
            async move {
                let new_row = NewRoomRow {
                    id: Uuid::new_v4(),
                    owner_id: *owner_id.as_uuid(),
                    name: draft.name(),
                    country: draft.country(),
                    city: draft.city(),
                    price: draft.price(),
                    rooms: draft.rooms(),
                    toilets: draft.toilets(),
                    description: draft.description(),
                    address: draft.address(),
                    pet_friendly: draft.pet_friendly(),
                    kind: draft.kind().as_str(),
                    category_id,
                };

                let row: RoomRow = diesel::insert_into(rooms::table)
                    .values(&new_row)
                    .returning(RoomRow::as_returning())
                    .get_result(conn)
                    .await?;

                let amenity_rows = replace_amenity_links(conn, row.id, amenity_ids).await?;
                let category = load_category(conn, category_id).await?;

                assemble_room(row, category, amenity_rows)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_tx_error)
    }

    async fn update(
        &self,
        room_id: Uuid,
        patch: RoomPatch,
        category_id: Option<Uuid>,
        amenity_ids: Option<Vec<Uuid>>,
    ) -> Result<Room, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        conn.transaction::<Room, RoomTxError, _>(|conn| {
            let patch = &patch;
            let amenity_ids = amenity_ids.as_deref();
            async move {
                let changeset = RoomChangeset {
                    name: patch.name(),
                    country: patch.country(),
                    city: patch.city(),
                    price: patch.price(),
                    rooms: patch.rooms(),
                    toilets: patch.toilets(),
                    description: patch.description(),
                    address: patch.address(),
                    pet_friendly: patch.pet_friendly(),
                    kind: patch.kind().map(|kind| kind.as_str()),
                    category_id,
                };

                let row: RoomRow = if changeset.is_empty() {
                    rooms::table
                        .filter(rooms::id.eq(room_id))
                        .select(RoomRow::as_select())
                        .first(conn)
                        .await?
                } else {
                    diesel::update(rooms::table.filter(rooms::id.eq(room_id)))
                        .set(&changeset)
                        .returning(RoomRow::as_returning())
                        .get_result(conn)
                        .await?
                };

                let amenity_rows = match amenity_ids {
                    Some(ids) => replace_amenity_links(conn, room_id, ids).await?,
                    None => {
                        room_amenities::table
                            .inner_join(amenities::table)
                            .filter(room_amenities::room_id.eq(room_id))
                            .select(AmenityRow::as_select())
                            .load(conn)
                            .await?
                    }
                };
                let category = load_category(conn, row.category_id).await?;

                assemble_room(row, category, amenity_rows)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_tx_error)
    }

    async fn find_by_id(&self, room_id: Uuid) -> Result<Option<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        load_room(&mut conn, room_id).await.map_err(map_tx_error)
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        let total: i64 = rooms::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;

        let rows: Vec<RoomRow> = rooms::table
            .order((rooms::created_at.desc(), rooms::id.desc()))
            .offset(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .limit(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;

        let room_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let category_ids: Vec<Uuid> = rows.iter().map(|row| row.category_id).collect();

        let category_rows: Vec<CategoryRow> = categories::table
            .filter(categories::id.eq_any(&category_ids))
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        let categories_by_id: HashMap<Uuid, CategoryRow> = category_rows
            .into_iter()
            .map(|row| (row.id, row))
            .collect();

        let link_rows: Vec<(Uuid, AmenityRow)> = room_amenities::table
            .inner_join(amenities::table)
            .filter(room_amenities::room_id.eq_any(&room_ids))
            .select((room_amenities::room_id, AmenityRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        let mut amenities_by_room: HashMap<Uuid, Vec<AmenityRow>> = HashMap::new();
        for (room_id, amenity_row) in link_rows {
            amenities_by_room.entry(room_id).or_default().push(amenity_row);
        }

        let items = rows
            .into_iter()
            .map(|row| {
                let category = categories_by_id.get(&row.category_id).cloned().ok_or_else(|| {
                    RoomTxError::Corrupt(format!("room {} references a missing category", row.id))
                })?;
                let amenity_rows = amenities_by_room.remove(&row.id).unwrap_or_default();
                assemble_room(row, category, amenity_rows)
            })
            .collect::<Result<Vec<Room>, RoomTxError>>()
            .map_err(map_tx_error)?;

        Ok(Paginated::new(items, page, u64::try_from(total).unwrap_or(0)))
    }

    async fn delete(&self, room_id: Uuid) -> Result<(), RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        diesel::delete(rooms::table.filter(rooms::id.eq(room_id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_query_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row assembly edge cases.

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn room_row() -> RoomRow {
        let now = Utc::now();
        RoomRow {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Seaside loft".into(),
            country: "PT".into(),
            city: "Lisbon".into(),
            price: 120,
            rooms: 2,
            toilets: 1,
            description: "Bright loft near the water".into(),
            address: "Rua do Mar 12".into(),
            pet_friendly: true,
            kind: "entire_place".into(),
            category_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[fixture]
    fn category_row() -> CategoryRow {
        let now = Utc::now();
        CategoryRow {
            id: Uuid::new_v4(),
            name: "Tiny homes".into(),
            kind: "rooms".into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn amenity_row(name: &str) -> AmenityRow {
        let now = Utc::now();
        AmenityRow {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    fn assemble_room_orders_amenities_by_name(room_row: RoomRow, category_row: CategoryRow) {
        let room = assemble_room(
            room_row,
            category_row,
            vec![amenity_row("wifi"), amenity_row("parking")],
        )
        .unwrap_or_else(|_| panic!("valid rows must assemble"));

        let names: Vec<&str> = room.amenities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["parking", "wifi"]);
    }

    #[rstest]
    fn assemble_room_rejects_an_unknown_stored_kind(
        mut room_row: RoomRow,
        category_row: CategoryRow,
    ) {
        room_row.kind = "castle".into();
        let error = assemble_room(room_row, category_row, Vec::new());
        assert!(matches!(error, Err(RoomTxError::Corrupt(_))));
    }

    #[rstest]
    fn amenity_not_found_survives_the_tx_error_mapping() {
        let id = Uuid::new_v4();
        let mapped = map_tx_error(RoomTxError::AmenityNotFound(id));
        assert_eq!(mapped, RoomRepositoryError::AmenityNotFound { id });
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let mapped = map_checkout_error(PoolError::checkout("connection refused"));
        assert!(matches!(mapped, RoomRepositoryError::Connection { .. }));
    }
}
