use std::collections::BTreeMap;

use serde_derive::Serialize;

use workdays_store_core::services::date_formatter::DateFormatter;
use workdays_store_core::{DueDate, StoreError, StoreResult, Task, Workday, WorkdayId};

use crate::wire::{ArrayValue, MapValue, WireValue};

/// Request body of a document-creation call. The store assigns the
/// document id, so no id field is ever sent.
#[derive(Serialize, Debug)]
pub struct DocumentBody {
    pub fields: BTreeMap<String, WireValue>,
}

pub fn encode_workday(workday: &Workday, date_formatter: &DateFormatter) -> DocumentBody {
    let due_date = workday.due_date.as_unix_seconds();
    // The display date is always recomputed from the due date, never taken
    // from the caller.
    let display_date = date_formatter.display_date(workday.due_date.as_unix_millis());

    let mut fields = BTreeMap::new();
    fields.insert("dueDate".to_string(), WireValue::IntegerValue(due_date));
    fields.insert(
        "displayDate".to_string(),
        WireValue::StringValue(display_date),
    );
    fields.insert("tasks".to_string(), encode_task_list(&workday.tasks));
    fields.insert(
        "notes".to_string(),
        WireValue::string(workday.notes.clone()),
    );
    fields.insert(
        "userId".to_string(),
        WireValue::string(workday.user_id.clone()),
    );

    DocumentBody { fields }
}

fn encode_task_list(tasks: &[Task]) -> WireValue {
    WireValue::ArrayValue(ArrayValue {
        values: tasks.iter().map(encode_task).collect(),
    })
}

fn encode_task(task: &Task) -> WireValue {
    let mut fields = BTreeMap::new();
    fields.insert("title".to_string(), WireValue::string(task.title.clone()));
    fields.insert("todo".to_string(), WireValue::IntegerValue(task.todo));
    fields.insert("done".to_string(), WireValue::IntegerValue(task.done));
    // `completed` has always been written as false; readers go by the
    // todo/done counters rather than this flag.
    fields.insert("completed".to_string(), WireValue::BooleanValue(false));

    WireValue::MapValue(MapValue { fields })
}

pub fn decode_workday(
    name: &str,
    fields: &BTreeMap<String, WireValue>,
) -> StoreResult<Workday> {
    let tasks = field(fields, "tasks")?
        .as_array()?
        .iter()
        .map(decode_task)
        .collect::<StoreResult<Vec<Task>>>()?;

    Ok(Workday {
        id: Some(workday_id_from_resource_name(name)?),
        user_id: field(fields, "userId")?.as_str()?.to_string(),
        notes: field(fields, "notes")?.as_str()?.to_string(),
        display_date: field(fields, "displayDate")?.as_str()?.to_string(),
        due_date: DueDate::Seconds(field(fields, "dueDate")?.as_integer()?),
        tasks,
    })
}

fn decode_task(value: &WireValue) -> StoreResult<Task> {
    let fields = value.as_map()?;

    Ok(Task {
        title: field(fields, "title")?.as_str()?.to_string(),
        todo: field(fields, "todo")?.as_integer()?,
        done: field(fields, "done")?.as_integer()?,
        completed: field(fields, "completed")?.as_boolean()?,
    })
}

fn field<'a>(
    fields: &'a BTreeMap<String, WireValue>,
    name: &str,
) -> StoreResult<&'a WireValue> {
    fields
        .get(name)
        .ok_or_else(|| StoreError::CorruptedDocument(format!("missing field '{name}'")))
}

/// Document resource names follow
/// `projects/{project}/databases/{database}/documents/{collection}/{id}`,
/// so the document id sits at the seventh path segment. This breaks if the
/// store ever reshapes its resource names.
pub fn workday_id_from_resource_name(name: &str) -> StoreResult<WorkdayId> {
    name.split('/')
        .nth(6)
        .map(str::to_string)
        .ok_or_else(|| StoreError::CorruptedDocument(format!("malformed document name '{name}'")))
}
