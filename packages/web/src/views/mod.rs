mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod accounts;
pub use accounts::{AccountDetail, AccountEdit, AccountList, AccountNew};

mod contacts;
pub use contacts::{ContactDetail, ContactEdit, ContactList, ContactNew};

mod opportunities;
pub use opportunities::{OpportunityDetail, OpportunityEdit, OpportunityList, OpportunityNew};

mod notes;
pub use notes::{NoteDetail, NoteEdit, NoteList, NoteNew};

mod not_found;
pub use not_found::NotFound;
