pub mod verify_route;
