use super::{HttpMethod, RequestDescriptor};
use crate::domain::{
    AccountId, Attachment, ContentType, FileName, MessageText, Originator, Recipients, SendMms,
    Subject,
};

const SEND_MMS_TEMPLATE: &str = "/p3gw-mod-odg-mms/rest/<environment>/sendMMS";

/// Encode an MMS request. `attachment` is the already base64-encoded payload, if any.
pub fn encode_send_mms(request: &SendMms, attachment: Option<&str>) -> RequestDescriptor {
    let options = request.options();
    RequestDescriptor::new(HttpMethod::Post, SEND_MMS_TEMPLATE)
        .param(Recipients::FIELD, request.recipients().joined())
        .param(Subject::FIELD, request.subject().as_str())
        .param_opt(
            MessageText::FIELD,
            options.message.as_ref().map(MessageText::as_str),
        )
        .param_opt(Attachment::FIELD, attachment)
        .param_opt(
            FileName::FIELD,
            options.filename.as_ref().map(FileName::as_str),
        )
        .param_opt(
            ContentType::FIELD,
            options.content_type.as_ref().map(ContentType::as_str),
        )
        .param_opt(
            Originator::FIELD,
            options.originator.as_ref().map(Originator::as_str),
        )
        .param_opt(
            AccountId::FIELD,
            options.account.as_ref().map(AccountId::as_str),
        )
}
