mod dog_detail;
mod dogs;
mod donate;
mod home;
mod not_found;

pub use dog_detail::DogDetail;
pub use dogs::Dogs;
pub use donate::Donate;
pub use home::Home;
pub use not_found::NotFound;
