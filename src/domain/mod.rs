//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod token;
mod validation;
mod value;

pub use request::{
    AccountBalance, LocateIp, SendMms, SendMmsOptions, SendSms, SendSmsOptions,
    SendValidationSms, SendValidationSmsOptions, SetQuota, ValidateNumber,
};
pub use token::{InvalidExpiryError, Token};
pub use validation::ValidationError;
pub use value::{
    AccountId, Attachment, ContentType, Credentials, Environment, FileName, IpAddresses,
    MessageText, ModuleId, Originator, Password, PhoneNumber, RawPhoneNumber, Recipients,
    Subject, Username, ValidationKey,
};
