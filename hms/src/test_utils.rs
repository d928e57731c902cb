use abi::{
    ChainForm, Config, DeletePolicy, EmployeeRole, Hotel, HotelChain, HotelForm, Room, RoomForm,
};
use sqlx_db_tester::TestDb;

use crate::{ChainRepo, HmsManager, HotelRepo, RoomRepo};

/// a fresh migrated database per test, dropped together with the returned `TestDb`
pub async fn test_manager(policy: DeletePolicy) -> (TestDb, HmsManager) {
    let config = Config::load("../service/fixtures/config.yml").unwrap();
    let tdb = TestDb::new(
        config.db.host,
        config.db.port,
        config.db.user,
        config.db.password,
        "../migrations",
    );
    let pool = tdb.get_pool().await;
    (tdb, HmsManager::new(pool, policy))
}

pub async fn seed_chain(manager: &HmsManager) -> HotelChain {
    manager
        .create_chain(ChainForm::new("Marriott Hotel", "x@y.com", 7))
        .await
        .unwrap()
}

pub async fn seed_hotel(manager: &HmsManager, chain_id: i64) -> Hotel {
    let mut form = HotelForm::new("Marriott Hotel", "marriotthotel@gmail.com", 4, 5);
    form.address = "111 Queen Street West, Toronto, ON, Canada".to_string();
    manager.create_hotel(chain_id, form).await.unwrap()
}

pub async fn seed_room(manager: &HmsManager, hotel_id: i64, room_number: i32) -> Room {
    let mut form = RoomForm::new(room_number, 104.0, 5);
    form.amenities = vec!["wifi".into(), "tv".into(), "PS5".into()];
    form.view_type = "mountain".to_string();
    form.extendability = true;
    manager.create_room(hotel_id, form).await.unwrap()
}

pub async fn seed_employee(
    manager: &HmsManager,
    hotel_id: Option<i64>,
    first_name: &str,
    role: EmployeeRole,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO hms.employees (hotel_id, first_name, last_name, email, role) VALUES ($1, $2, 'Doe', 'staff@hms.com', $3::hms.employee_role) RETURNING id",
    )
    .bind(hotel_id)
    .bind(first_name)
    .bind(role.to_string())
    .fetch_one(&manager.pool)
    .await
    .unwrap()
}
