// ABOUTME: Links to a task's detail page in the AWS console.
// ABOUTME: Picks the console host from the region's partition.

use crate::backend::TaskHandle;

const CONSOLE_HOST: &str = "console.aws.amazon.com";
const CONSOLE_HOST_CN: &str = "console.amazonaws.cn";
const CONSOLE_HOST_GOV: &str = "console.amazonaws-us-gov.com";

fn console_host(region: &str) -> &'static str {
    if region.starts_with("cn-") {
        CONSOLE_HOST_CN
    } else if region.starts_with("us-gov-") {
        CONSOLE_HOST_GOV
    } else {
        CONSOLE_HOST
    }
}

/// Detail page of `task` in `cluster`.
pub fn task_details_url(region: &str, cluster: &str, task: &TaskHandle) -> String {
    format!(
        "https://{}/ecs/home?{}#/clusters/{}/tasks/{}/details",
        console_host(region),
        region,
        cluster,
        task.task_id()
    )
}
