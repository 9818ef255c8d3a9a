pub mod condition;
pub mod diagnosis;
pub mod question;
pub mod record;
pub mod red_flag;
pub mod referral;
pub mod response;
pub mod session;
pub mod test_queue;
