#[tokio::main]
async fn main() {
    hotel_reservation_backend::run().await;
}
