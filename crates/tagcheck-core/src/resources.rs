/// azurerm resource types that accept a `tags` argument.
pub const TAGGABLE_RESOURCES: &[&str] = &[
    "azurerm_api_management",
    "azurerm_app_configuration",
    "azurerm_app_service",
    "azurerm_app_service_plan",
    "azurerm_application_gateway",
    "azurerm_application_insights",
    "azurerm_application_security_group",
    "azurerm_automation_account",
    "azurerm_availability_set",
    "azurerm_bastion_host",
    "azurerm_batch_account",
    "azurerm_cdn_endpoint",
    "azurerm_cdn_profile",
    "azurerm_cognitive_account",
    "azurerm_container_group",
    "azurerm_container_registry",
    "azurerm_cosmosdb_account",
    "azurerm_data_factory",
    "azurerm_databricks_workspace",
    "azurerm_dns_zone",
    "azurerm_eventhub_namespace",
    "azurerm_express_route_circuit",
    "azurerm_firewall",
    "azurerm_firewall_policy",
    "azurerm_frontdoor",
    "azurerm_function_app",
    "azurerm_image",
    "azurerm_key_vault",
    "azurerm_kubernetes_cluster",
    "azurerm_kubernetes_cluster_node_pool",
    "azurerm_lb",
    "azurerm_linux_function_app",
    "azurerm_linux_virtual_machine",
    "azurerm_linux_virtual_machine_scale_set",
    "azurerm_linux_web_app",
    "azurerm_log_analytics_workspace",
    "azurerm_logic_app_workflow",
    "azurerm_managed_disk",
    "azurerm_mssql_database",
    "azurerm_mssql_elasticpool",
    "azurerm_mssql_server",
    "azurerm_mysql_flexible_server",
    "azurerm_nat_gateway",
    "azurerm_network_interface",
    "azurerm_network_security_group",
    "azurerm_network_watcher",
    "azurerm_postgresql_flexible_server",
    "azurerm_private_dns_zone",
    "azurerm_private_endpoint",
    "azurerm_public_ip",
    "azurerm_recovery_services_vault",
    "azurerm_redis_cache",
    "azurerm_resource_group",
    "azurerm_route_table",
    "azurerm_search_service",
    "azurerm_service_plan",
    "azurerm_servicebus_namespace",
    "azurerm_signalr_service",
    "azurerm_snapshot",
    "azurerm_storage_account",
    "azurerm_synapse_workspace",
    "azurerm_user_assigned_identity",
    "azurerm_virtual_machine",
    "azurerm_virtual_network",
    "azurerm_virtual_network_gateway",
    "azurerm_windows_function_app",
    "azurerm_windows_virtual_machine",
    "azurerm_windows_virtual_machine_scale_set",
    "azurerm_windows_web_app",
];

pub fn is_taggable(resource_type: &str) -> bool {
    TAGGABLE_RESOURCES.contains(&resource_type)
}
