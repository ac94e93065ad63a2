pub mod credentials;
pub mod extract;
pub mod faculties;
pub mod grades;
pub mod session;
