//! Shared harness for API integration tests.
//!
//! Repositories here are in-memory implementations of the driven ports.
//! Every adapter holds the same store behind one mutex, so multi-step writes
//! (room plus amenity links, overlap check plus booking insert) are atomic
//! exactly like their transactional SQL counterparts.

use std::sync::{Arc, Mutex, MutexGuard};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use chrono::NaiveDate;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use backend::Trace;
use backend::domain::ports::{
    AmenityRepository, AmenityRepositoryError, BookingRepository, BookingRepositoryError,
    CategoryRepository, CategoryRepositoryError, PhotoRepository, PhotoRepositoryError,
    ReviewRepository, ReviewRepositoryError, RoomRepository, RoomRepositoryError, UserRepository,
    UserRepositoryError,
};
use backend::domain::{
    AmenitiesCommandService, AmenitiesQueryService, Amenity, AmenityDraft, AmenityPatch, Booking,
    BookingDraft, BookingKind, BookingsCommandService, BookingsQueryService, Category,
    CategoryKind, DisplayName, Photo, PhotoDraft, PhotosCommandService, Review, ReviewDraft,
    ReviewsCommandService, ReviewsQueryService, Room, RoomDraft, RoomPatch, RoomsCommandService,
    RoomsQueryService, User, UserAccountService, UserId, ranges_overlap,
};
use backend::inbound::http::amenities::{
    create_amenity, delete_amenity, get_amenity, list_amenities, update_amenity,
};
use backend::inbound::http::bookings::{create_room_booking, list_room_bookings};
use backend::inbound::http::photos::create_room_photo;
use backend::inbound::http::reviews::{create_room_review, list_room_reviews};
use backend::inbound::http::rooms::{create_room, delete_room, get_room, list_rooms, update_room};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{login, logout, me};

/// Seeded room-kind category available to every test.
pub const ROOMS_CATEGORY_ID: Uuid = Uuid::from_u128(0x0d4c_f0b9_6d9c_4dc3_9d42_cc63_e31a_1f75);
/// Seeded experience-kind category, present to exercise kind checks.
pub const EXPERIENCES_CATEGORY_ID: Uuid =
    Uuid::from_u128(0x9b6c_f9b8_1f64_4b12_8bd9_17e7_e5a7_f0a2);

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    amenities: Vec<Amenity>,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    reviews: Vec<Review>,
    photos: Vec<Photo>,
    users: Vec<User>,
}

/// In-memory database shared by every adapter in a test.
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create a store seeded with the category catalogue.
    pub fn new() -> Arc<Self> {
        let mut tables = Tables::default();
        tables.categories.push(Category {
            id: ROOMS_CATEGORY_ID,
            name: "Tiny homes".into(),
            kind: CategoryKind::Rooms,
        });
        tables.categories.push(Category {
            id: EXPERIENCES_CATEGORY_ID,
            name: "City walks".into(),
            kind: CategoryKind::Experiences,
        });
        Arc::new(Self {
            tables: Mutex::new(tables),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("store mutex poisoned")
    }

    /// Seed an amenity directly, returning its id.
    pub fn seed_amenity(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().amenities.push(Amenity {
            id,
            name: name.into(),
            description: None,
        });
        id
    }

    /// Count rooms currently stored. Used to observe rollbacks.
    pub fn room_count(&self) -> usize {
        self.lock().rooms.len()
    }

    /// Seed a booking directly, bypassing the check-in validation so tests
    /// can place stays in the past.
    pub fn seed_booking(&self, room_id: Uuid, check_in: NaiveDate, check_out: NaiveDate) {
        self.lock().bookings.push(Booking {
            id: Uuid::new_v4(),
            room_id,
            user_id: UserId::random(),
            kind: BookingKind::Rooms,
            check_in,
            check_out,
            guests: 1,
        });
    }
}

/// A valid room creation payload against the seeded rooms category.
pub fn room_payload(amenity_ids: &[Uuid]) -> serde_json::Value {
    serde_json::json!({
        "name": "Seaside loft",
        "country": "PT",
        "city": "Lisbon",
        "price": 120,
        "rooms": 2,
        "toilets": 1,
        "description": "Bright loft near the water",
        "address": "Rua do Mar 12",
        "petFriendly": true,
        "kind": "entire_place",
        "category": ROOMS_CATEGORY_ID.to_string(),
        "amenities": amenity_ids.iter().map(Uuid::to_string).collect::<Vec<_>>()
    })
}

#[derive(Clone)]
struct InMemoryCategories(Arc<InMemoryStore>);

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let tables = self.0.lock();
        Ok(tables
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned())
    }
}

#[derive(Clone)]
struct InMemoryAmenities(Arc<InMemoryStore>);

#[async_trait]
impl AmenityRepository for InMemoryAmenities {
    async fn insert(&self, draft: AmenityDraft) -> Result<Amenity, AmenityRepositoryError> {
        let amenity = Amenity {
            id: Uuid::new_v4(),
            name: draft.name().to_owned(),
            description: draft.description().map(str::to_owned),
        };
        self.0.lock().amenities.push(amenity.clone());
        Ok(amenity)
    }

    async fn find_by_id(
        &self,
        amenity_id: Uuid,
    ) -> Result<Option<Amenity>, AmenityRepositoryError> {
        let tables = self.0.lock();
        Ok(tables
            .amenities
            .iter()
            .find(|amenity| amenity.id == amenity_id)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<Amenity>, AmenityRepositoryError> {
        let tables = self.0.lock();
        let mut sorted = tables.amenities.clone();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Paginated::slice(sorted, page))
    }

    async fn update(
        &self,
        amenity_id: Uuid,
        patch: AmenityPatch,
    ) -> Result<Option<Amenity>, AmenityRepositoryError> {
        let mut tables = self.0.lock();
        let Some(amenity) = tables
            .amenities
            .iter_mut()
            .find(|amenity| amenity.id == amenity_id)
        else {
            return Ok(None);
        };
        if let Some(name) = patch.name() {
            amenity.name = name.to_owned();
        }
        if let Some(description) = patch.description() {
            amenity.description = Some(description.to_owned());
        }
        Ok(Some(amenity.clone()))
    }

    async fn delete(&self, amenity_id: Uuid) -> Result<bool, AmenityRepositoryError> {
        let mut tables = self.0.lock();
        let before = tables.amenities.len();
        tables.amenities.retain(|amenity| amenity.id != amenity_id);
        let removed = tables.amenities.len() < before;
        if removed {
            // Link cascade, same as the foreign key on delete.
            for room in &mut tables.rooms {
                room.amenities.retain(|amenity| amenity.id != amenity_id);
            }
        }
        Ok(removed)
    }
}

#[derive(Clone)]
struct InMemoryRooms(Arc<InMemoryStore>);

fn resolve_amenities(
    tables: &Tables,
    ids: &[Uuid],
) -> Result<Vec<Amenity>, RoomRepositoryError> {
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let amenity = tables
            .amenities
            .iter()
            .find(|amenity| amenity.id == *id)
            .cloned()
            .ok_or_else(|| RoomRepositoryError::amenity_not_found(*id))?;
        resolved.push(amenity);
    }
    resolved.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(resolved)
}

#[async_trait]
impl RoomRepository for InMemoryRooms {
    async fn create(
        &self,
        owner_id: UserId,
        draft: RoomDraft,
        category_id: Uuid,
        amenity_ids: Vec<Uuid>,
    ) -> Result<Room, RoomRepositoryError> {
        let mut tables = self.0.lock();
        let amenities = resolve_amenities(&tables, &amenity_ids)?;
        let category = tables
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
            .ok_or_else(|| RoomRepositoryError::query("category row missing"))?;

        let room = Room {
            id: Uuid::new_v4(),
            owner_id,
            name: draft.name().to_owned(),
            country: draft.country().to_owned(),
            city: draft.city().to_owned(),
            price: draft.price(),
            rooms: draft.rooms(),
            toilets: draft.toilets(),
            description: draft.description().to_owned(),
            address: draft.address().to_owned(),
            pet_friendly: draft.pet_friendly(),
            kind: draft.kind(),
            category,
            amenities,
        };
        tables.rooms.push(room.clone());
        Ok(room)
    }

    async fn update(
        &self,
        room_id: Uuid,
        patch: RoomPatch,
        category_id: Option<Uuid>,
        amenity_ids: Option<Vec<Uuid>>,
    ) -> Result<Room, RoomRepositoryError> {
        let mut tables = self.0.lock();
        let amenities = amenity_ids
            .as_deref()
            .map(|ids| resolve_amenities(&tables, ids))
            .transpose()?;
        let category = category_id
            .map(|id| {
                tables
                    .categories
                    .iter()
                    .find(|category| category.id == id)
                    .cloned()
                    .ok_or_else(|| RoomRepositoryError::query("category row missing"))
            })
            .transpose()?;

        let room = tables
            .rooms
            .iter_mut()
            .find(|room| room.id == room_id)
            .ok_or_else(|| RoomRepositoryError::query("record not found"))?;

        if let Some(name) = patch.name() {
            room.name = name.to_owned();
        }
        if let Some(country) = patch.country() {
            room.country = country.to_owned();
        }
        if let Some(city) = patch.city() {
            room.city = city.to_owned();
        }
        if let Some(price) = patch.price() {
            room.price = price;
        }
        if let Some(rooms) = patch.rooms() {
            room.rooms = rooms;
        }
        if let Some(toilets) = patch.toilets() {
            room.toilets = toilets;
        }
        if let Some(description) = patch.description() {
            room.description = description.to_owned();
        }
        if let Some(address) = patch.address() {
            room.address = address.to_owned();
        }
        if let Some(pet_friendly) = patch.pet_friendly() {
            room.pet_friendly = pet_friendly;
        }
        if let Some(kind) = patch.kind() {
            room.kind = kind;
        }
        if let Some(category) = category {
            room.category = category;
        }
        if let Some(amenities) = amenities {
            room.amenities = amenities;
        }
        Ok(room.clone())
    }

    async fn find_by_id(&self, room_id: Uuid) -> Result<Option<Room>, RoomRepositoryError> {
        let tables = self.0.lock();
        Ok(tables.rooms.iter().find(|room| room.id == room_id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<Room>, RoomRepositoryError> {
        let tables = self.0.lock();
        let newest_first: Vec<Room> = tables.rooms.iter().rev().cloned().collect();
        Ok(Paginated::slice(newest_first, page))
    }

    async fn delete(&self, room_id: Uuid) -> Result<(), RoomRepositoryError> {
        let mut tables = self.0.lock();
        tables.rooms.retain(|room| room.id != room_id);
        tables.bookings.retain(|booking| booking.room_id != room_id);
        tables.reviews.retain(|review| review.room_id != room_id);
        tables.photos.retain(|photo| photo.room_id != room_id);
        Ok(())
    }
}

#[derive(Clone)]
struct InMemoryBookings(Arc<InMemoryStore>);

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn insert(&self, draft: BookingDraft) -> Result<Booking, BookingRepositoryError> {
        let mut tables = self.0.lock();
        let overlaps = tables.bookings.iter().any(|booking| {
            booking.room_id == draft.room_id()
                && booking.kind == BookingKind::Rooms
                && ranges_overlap(
                    booking.check_in,
                    booking.check_out,
                    draft.check_in(),
                    draft.check_out(),
                )
        });
        if overlaps {
            return Err(BookingRepositoryError::overlap());
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            room_id: draft.room_id(),
            user_id: draft.user_id().clone(),
            kind: BookingKind::Rooms,
            check_in: draft.check_in(),
            check_out: draft.check_out(),
            guests: draft.guests(),
        };
        tables.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_upcoming(
        &self,
        room_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let tables = self.0.lock();
        let mut upcoming: Vec<Booking> = tables
            .bookings
            .iter()
            .filter(|booking| {
                booking.room_id == room_id
                    && booking.kind == BookingKind::Rooms
                    && booking.check_in > as_of
            })
            .cloned()
            .collect();
        upcoming.sort_by_key(|booking| booking.check_in);
        Ok(upcoming)
    }
}

#[derive(Clone)]
struct InMemoryReviews(Arc<InMemoryStore>);

#[async_trait]
impl ReviewRepository for InMemoryReviews {
    async fn insert(
        &self,
        room_id: Uuid,
        user_id: UserId,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewRepositoryError> {
        let review = Review {
            id: Uuid::new_v4(),
            room_id,
            user_id,
            payload: draft.payload().to_owned(),
            rating: draft.rating(),
        };
        self.0.lock().reviews.push(review.clone());
        Ok(review)
    }

    async fn list_for_room(
        &self,
        room_id: Uuid,
        page: PageRequest,
    ) -> Result<Paginated<Review>, ReviewRepositoryError> {
        let tables = self.0.lock();
        let newest_first: Vec<Review> = tables
            .reviews
            .iter()
            .filter(|review| review.room_id == room_id)
            .rev()
            .cloned()
            .collect();
        Ok(Paginated::slice(newest_first, page))
    }
}

#[derive(Clone)]
struct InMemoryPhotos(Arc<InMemoryStore>);

#[async_trait]
impl PhotoRepository for InMemoryPhotos {
    async fn insert(
        &self,
        room_id: Uuid,
        draft: PhotoDraft,
    ) -> Result<Photo, PhotoRepositoryError> {
        let photo = Photo {
            id: Uuid::new_v4(),
            room_id,
            file: draft.file().to_owned(),
            description: draft.description().map(str::to_owned),
        };
        self.0.lock().photos.push(photo.clone());
        Ok(photo)
    }
}

#[derive(Clone)]
struct InMemoryUsers(Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_or_create(
        &self,
        display_name: DisplayName,
    ) -> Result<User, UserRepositoryError> {
        let mut tables = self.0.lock();
        if let Some(user) = tables
            .users
            .iter()
            .find(|user| user.display_name() == &display_name)
        {
            return Ok(user.clone());
        }
        let user = User::new(UserId::random(), display_name);
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.0.lock();
        Ok(tables
            .users
            .iter()
            .find(|user| user.id() == &user_id)
            .cloned())
    }
}

fn http_state(store: &Arc<InMemoryStore>) -> HttpState {
    let rooms = Arc::new(InMemoryRooms(store.clone()));
    let categories = Arc::new(InMemoryCategories(store.clone()));
    let amenities = Arc::new(InMemoryAmenities(store.clone()));
    let bookings = Arc::new(InMemoryBookings(store.clone()));
    let reviews = Arc::new(InMemoryReviews(store.clone()));
    let photos = Arc::new(InMemoryPhotos(store.clone()));
    let users = Arc::new(InMemoryUsers(store.clone()));

    HttpState {
        users: Arc::new(UserAccountService::new(users)),
        rooms: Arc::new(RoomsCommandService::new(rooms.clone(), categories)),
        rooms_query: Arc::new(RoomsQueryService::new(rooms.clone())),
        amenities: Arc::new(AmenitiesCommandService::new(amenities.clone())),
        amenities_query: Arc::new(AmenitiesQueryService::new(amenities)),
        bookings: Arc::new(BookingsCommandService::new(bookings.clone(), rooms.clone())),
        bookings_query: Arc::new(BookingsQueryService::new(bookings, rooms.clone())),
        reviews: Arc::new(ReviewsCommandService::new(reviews.clone(), rooms.clone())),
        reviews_query: Arc::new(ReviewsQueryService::new(reviews, rooms.clone())),
        photos: Arc::new(PhotosCommandService::new(photos, rooms)),
    }
}

/// Build an initialised application over the given store.
pub async fn spawn_app(
    store: &Arc<InMemoryStore>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(http_state(store)))
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .wrap(session)
                    .service(login)
                    .service(logout)
                    .service(me)
                    .service(list_rooms)
                    .service(get_room)
                    .service(create_room)
                    .service(update_room)
                    .service(delete_room)
                    .service(list_room_bookings)
                    .service(create_room_booking)
                    .service(list_room_reviews)
                    .service(create_room_review)
                    .service(create_room_photo)
                    .service(list_amenities)
                    .service(get_amenity)
                    .service(create_amenity)
                    .service(update_amenity)
                    .service(delete_amenity),
            ),
    )
    .await
}

/// Log in with the given display name, returning the session cookie.
pub async fn login_as(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    display_name: &str,
) -> Cookie<'static> {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(serde_json::json!({ "displayName": display_name }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert!(response.status().is_success());
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
