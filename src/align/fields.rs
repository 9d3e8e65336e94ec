/// Fields copied from a raw work item by [`super::project`]. Anything not
/// listed here is dropped. `id` is always stamped separately.
pub const KNOWN_FIELDS: &[&str] = &[
    "abilityToExec", "acceptedDate", "acceptedUserId", "actualEndDate", "additionalProgramIds",
    "additionalProcessStepIds", "affectedCountryIds", "allowTaskDeletion", "allowTeamToRunStandup",
    "anchorSprint", "anchorSprintId", "anchorSprintIds", "associatedTicket", "autoEstimateValue",
    "beginDate", "benefits", "blendedHourlyRate", "blockedReason", "budget", "businessDriver",
    "businessImpact", "businessValue", "capitalized", "caseDevelopmentId", "category", "city",
    "cityId", "closeDate", "code", "color", "communityIds", "company", "companyCode", "companyId",
    "completedDate", "competitive", "complexity", "connectorExternalTeamMapping", "connectorId",
    "connectorJiraBoards", "connectorJiraProjects", "connectorPriorities", "costCenter",
    "costCenterId", "costCenterName", "costCenters", "createDate", "createdBy", "customerIds",
    "customers", "customFields", "customhierarchies", "defectAllocation", "deliveredValue",
    "dependencyIds", "description", "descriptionRich", "dependency", "designStage", "devCompleteBy",
    "devCompleteDate", "discountRate", "division", "divisionCategory", "divisionCategoryName",
    "divisionId", "domains", "efficiencyDividend", "effortHours", "effortPoints", "effortSwag",
    "email", "employeeClassification", "employeeId", "enableAutoEstimate", "endDate", "endSprintId",
    "enterpriseHierarchy", "enterpriseHierarchyId", "epicObjectId", "estimateAtCompletion",
    "estimateTshirt", "estimationEffortPercent", "expenseSavings", "externalCapEx", "externalId",
    "externalKey", "externalOpEx", "externalProject", "externalUser", "failureImpact",
    "failureProbability", "feasibility", "featureId", "featureIds", "featureRank", "featureSummary",
    "fcastShare", "firstName", "flag", "forecastYears", "functionalArea", "fullName",
    "fundingStage", "goal", "goalId", "goalParent", "goalQuarter", "goals", "goalState", "goalType",
    "goalYear", "GridConfigurationsCapabilities", "GridConfigurationsDependencies",
    "GridConfigurationsEpics", "GridConfigurationsFeatures", "GridConfigurationsThemes", "health",
    "holidayCalendar", "holidayCity", "holidayCityId", "holidayRegionId", "hourlyRate",
    "hoursEstimate", "hypothesis", "impedimentIds", "ideas", "identifier", "image", "importance",
    "includeHours", "initialInvestment", "inProgressBy", "inProgressDate", "inProgressDateEnd",
    "inScope", "intakeFormId", "investmentType", "isActive", "isBlocked", "isCanceled",
    "isComplianceManager", "isExternal", "isImport", "isKanbanTeam", "isLocked", "isMultiProgram",
    "isRecycled", "isSolution", "isSplit", "isSystemRole", "isTimeTracking", "isUserManager",
    "itemToSyncDate", "iterationId", "iterationSort", "itemtype", "itemTypeId", "iterations",
    "itrisk", "itRisk", "jiraPriorityId", "jiraPriorityName", "jiraProjectKey", "keyresults",
    "lastLoginDate", "lastName", "lastUpdatedBy", "lastUpdatedDate", "leanUxCanvas", "link",
    "links", "managerId", "manWeeks", "maxAllocation", "measurement", "milestones", "mmf", "mvp",
    "name", "notes", "notificationStartDate", "notificationFrequency", "notStartedBy",
    "notStartedDate", "notStartedDateEnd", "originSprints", "overrideVelocity", "owner", "ownerId",
    "parentId", "parentName", "parentSplitId", "pendingApprovalBy", "pendingApprovalDate",
    "percentComp", "planningMode", "plannedValue", "points", "pointsEstimate", "portfolio",
    "portfolioAskDate", "portfolioId", "predecessorId", "primaryProgramId", "priority",
    "priorityId", "processStepId", "processStepName", "productId", "productName",
    "productObjectiveIds", "products", "program", "programId", "programIds", "programs",
    "prototype", "quadrant", "rank", "readyToStartBy", "readyToStartDate", "reference", "region",
    "regionId", "regionIds", "regions", "regressionHours", "release", "releaseId", "releaseIds",
    "releaseNumber", "releases", "releaseVehicle", "releaseVehicleIds", "reportColor",
    "requesterId", "revenueAssurance", "revenueGrowth", "riskAppetite", "riskIds", "risks",
    "roadmap", "roi", "role", "roleId", "roleName", "scoreCardId", "shortName", "schedule",
    "scheduleType", "score", "score1", "score2", "score3", "score4", "self", "short", "snapshots",
    "solutionId", "source", "spendToDate", "sprintPrefix", "sprintSchedule", "startDate",
    "startInitiationDate", "startSprintId", "state", "status", "storyId", "strategyDate",
    "strategyId", "strategyType", "strategyValue", "strategicDriver", "strategicHorizon",
    "strategicValueScore", "tags", "targetCompletionDate", "targetDate", "targetSyncSprintId",
    "team", "teamDescription", "teamId", "teamIds", "teamName", "teams", "teamType",
    "testCategoryIds", "testCompleteBy", "testCompleteDate", "testSuite", "testSuiteIteration",
    "themeId", "themes", "throughput", "tier", "timeApproverId", "timeTrackingRoles",
    "timeTrackingStartDate", "timeZone", "title", "trackBy", "totalCapEx", "totalHours",
    "totalOpEx", "type", "uid", "updateDate", "userEndDate", "users", "userStartDate", "userType",
    "valuePoints", "vehicleId", "viewPublicErs", "workCodeId", "yearlyCashFlow1",
];
