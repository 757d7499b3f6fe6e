use rxl_ledger::DrugLedger;
use rxl_store::RecordStore;
use tracing::debug;

use crate::error::ProtocolResult;
use crate::request::Request;
use crate::response::{KeyedRecord, Response};

/// Route a parsed request to the matching ledger operation.
pub fn dispatch<S: RecordStore>(
    ledger: &DrugLedger<S>,
    request: &Request,
) -> ProtocolResult<Response> {
    let response = match request {
        Request::ListDrugs => Response::Drugs(
            ledger
                .get_all_drugs()?
                .into_iter()
                .map(KeyedRecord::from)
                .collect(),
        ),
        Request::GetDrug { id } => ledger.get_drug(id)?.into(),
        Request::AddDrug { encoded } => Response::Drug(ledger.create_drug(encoded)?),
        Request::ChangeHolder { encoded } => ledger.change_holder(encoded)?.into(),
    };
    debug!(
        operation = request.operation(),
        status = ?response.status(),
        "request handled"
    );
    Ok(response)
}

/// Parse `path` and dispatch it.
pub fn handle_path<S: RecordStore>(ledger: &DrugLedger<S>, path: &str) -> ProtocolResult<Response> {
    let request = Request::parse(path)?;
    dispatch(ledger, &request)
}
